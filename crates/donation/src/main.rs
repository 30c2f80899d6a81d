#[tokio::main]
async fn main() {
    donation::start(std::env::args()).await;
}
