use byteview::ByteView;

const ACCESS_LOG: &str = "\
1024 GET /index.html
301 GET /moved
0 HEAD /health
52431 GET /download/archive.tar
";

fn main() {
    let mut total = 0u64;
    let mut requests = 0u64;
    for mut line in ByteView::from(ACCESS_LOG).lines() {
        let bytes_sent = line.chop_leading_u64();
        let method = line.trim_start().take_while(|b| b.is_ascii_alphabetic());
        total += bytes_sent;
        requests += 1;
        println!("{method:>4} {bytes_sent:>6}");
    }
    println!("{requests} requests, {total} bytes");
}
