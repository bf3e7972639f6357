use colored::Colorize;

use pitwall::client::AiClient;
use pitwall::error::Result;

use crate::output;

pub async fn check(client: &AiClient) -> Result<()> {
    let health = client.health().await?;

    output::print_item(&health, |h| {
        let status = if h.status == "ok" {
            h.status.green().bold().to_string()
        } else {
            h.status.yellow().to_string()
        };
        println!("{} {} ({})", "Backend:".bold(), status, client.config().base_url);
    });

    Ok(())
}
