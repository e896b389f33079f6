use anyhow::Result;
use zpodgen::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let args = zpodgen::cli::Args::parse_args();
    let mut app = App::new_from(&args)?;

    app.run(args).await?;

    Ok(())
}
