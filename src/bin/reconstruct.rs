use ssr::input::Input;
use ssr::recon::reconstruct;
use std::error::Error;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    let input: Input = serde_json::from_str(&raw)?;
    let result = reconstruct(&input)?;
    print!("{}", result.render());
    Ok(())
}
