use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    landing::cli::run().await?;
    Ok(())
}
