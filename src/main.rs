#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = treestamp::app::startup::startup().await;
    std::process::exit(code);
}
