use postmark::PostmarkClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let count = std::env::var("POSTMARK_LIST_COUNT").unwrap_or_else(|_| "10".to_owned());
    let offset = std::env::var("POSTMARK_LIST_OFFSET").unwrap_or_else(|_| "0".to_owned());

    let client = PostmarkClient::new()?;
    let response = client.list_servers(&count, &offset).await?;

    println!("total: {}", response.total_count);
    for server in response.servers {
        println!("  {} {} ({})", server.id, server.name, server.color);
    }

    Ok(())
}
