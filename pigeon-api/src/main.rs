#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pigeon_api::start_server().await?;
    Ok(())
}
