use std::io::IsTerminal;

const TYPE_WIDTH: usize = 22;

fn enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn paint(s: &str, code: &str) -> String {
    if enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}

fn marked(mark: &str, code: &str, label: &str, value: &str) -> String {
    format!("{} {} {}", paint(mark, code), paint(label, &format!("1;{}", code)), value)
}

pub fn success_line(label: &str, value: &str) -> String {
    marked("✓", "32", label, value)
}

pub fn info_line(label: &str, value: &str) -> String {
    marked("•", "36", label, value)
}

pub fn table_header(name: &str, count: &str) -> String {
    format!("{} {}", paint(&format!("{:<TYPE_WIDTH$}", name), "1"), paint(count, "1"))
}

pub fn table_row(name: &str, count: &str) -> String {
    format!("{:<TYPE_WIDTH$} {}", name, count)
}
