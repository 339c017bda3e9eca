#[tokio::main(flavor = "current_thread")]
async fn main() {
    polyprice::app::cli::run().await;
}
