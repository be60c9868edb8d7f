use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    network::application::http::parse::bench_request_line,
    network::application::http::parse::bench_url,
    network::application::http::parse::bench_status_line
);
criterion_main!(benches);
