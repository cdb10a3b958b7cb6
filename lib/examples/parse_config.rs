use byteview::ByteView;

const CONFIG: &str = "\
# listener
host = 0.0.0.0
port = 9000

# storage
data_dir = /var/lib/app
max_open_files = 512
";

/// Split a `key = value` line, tolerating surrounding whitespace
fn parse_line(line: ByteView<'_>) -> Option<(ByteView<'_>, ByteView<'_>)> {
    let mut line = line.trim();
    if line.is_empty() || line.first() == Some(b'#') {
        return None;
    }
    let key = line.try_chop_by_byte(b'=')?;
    Some((key.trim(), line.trim()))
}

fn main() {
    for line in ByteView::from(CONFIG).lines() {
        if let Some((key, value)) = parse_line(line) {
            println!("{key} => {value}");
        }
    }
}
