use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    // 各テストバイナリで一度だけ tracing_subscriber を初期化
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[allow(dead_code)]
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
