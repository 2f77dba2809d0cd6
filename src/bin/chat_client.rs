use std::io::{BufRead, Write};

use chat_relay::config::Config;
use chat_relay::store::identity::{DEFAULT_ID_PATH, FileIdProvider};
use chat_relay::store::transport::HttpTransport;
use chat_relay::store::{ConversationStore, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let transport = HttpTransport::new(config.api_base.clone());
    let ids = FileIdProvider::new(DEFAULT_ID_PATH);
    let route = std::env::var("CHAT_ROUTE").ok();

    let mut store = ConversationStore::new(transport, &ids, route);

    println!(
        "Chatting via {} (client {})",
        config.api_base,
        store.client_id()
    );
    println!("Type a message, /clear to reset, /quit to exit.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/quit" => break,
            "/clear" => {
                store.clear();
                println!("(cleared)");
            }
            text => {
                store.set_draft(text);
                store.send().await;
                if let Some(entry) = store.transcript().last() {
                    if entry.role == Role::Assistant {
                        println!("{}", entry.content);
                    }
                }
            }
        }
    }

    Ok(())
}
