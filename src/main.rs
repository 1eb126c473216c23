mod cli;

use anyhow::{Result, bail};
use clap::Parser;

use ticklist::application::ListView;
use ticklist::config::{APP_NAME, ListConfig};
use ticklist::core::name::NameEntry;
use ticklist::core::todo::PrioValue;
use ticklist::message::Message;
use ticklist::remote::HttpBackend;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ListConfig::load(cli.config.as_deref())?;

    if let Some(server) = cli.server {
        config.server_url = server;
    }
    ticklist::set_debug_logging(config.debug_logging || cli.debug);
    ticklist::logging::install(APP_NAME)?;

    let messages = match cli.command.unwrap_or(Commands::List) {
        Commands::Serve {
            listen,
            data_dir,
            static_dir,
        } => {
            if let Some(listen) = listen {
                config.listen = listen;
            }
            if let Some(dir) = data_dir {
                config.data_directory = dir;
            }
            if static_dir.is_some() {
                config.static_directory = static_dir;
            }
            return ticklist::server::serve(&config).await;
        }
        Commands::Hello { name, last_name } => {
            let backend = HttpBackend::new(&config.server_url)?;
            println!("{}", backend.greet(&name, last_name.as_deref()).await?);
            print_names(&backend.names().await?);
            return Ok(());
        }
        Commands::Names => {
            let backend = HttpBackend::new(&config.server_url)?;
            print_names(&backend.names().await?);
            return Ok(());
        }
        Commands::Forget { id } => {
            let backend = HttpBackend::new(&config.server_url)?;
            print_names(&backend.delete_name(id).await?);
            return Ok(());
        }
        Commands::List => vec![Message::Refresh],
        Commands::Add { owner, todo } => vec![
            Message::OwnerInputChanged(owner),
            Message::TodoInputChanged(todo),
            Message::Submit,
        ],
        Commands::Toggle { id } => vec![Message::ToggleChecked(id)],
        Commands::Prio { id, prio } => vec![Message::SetPriority(id, PrioValue::Text(prio))],
        Commands::Remove { id } => vec![Message::Remove(id)],
    };

    let mut view = ListView::new(HttpBackend::new(&config.server_url)?);
    for message in messages {
        view.update(message).await;
    }

    if let Some(error) = view.error() {
        bail!("{}", error);
    }
    if let Some(heading) = view.heading() {
        println!("{}", heading);
    }
    for row in view.rows() {
        println!("{}", row);
    }

    Ok(())
}

fn print_names(names: &[NameEntry]) {
    if names.is_empty() {
        println!("  No names yet.");
    }
    for entry in names {
        println!("{}  {}", entry.full_name(), entry.id);
    }
}
