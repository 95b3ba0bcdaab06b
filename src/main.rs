#[tokio::main]
async fn main() {
    festhive_backend::run().await;
}
