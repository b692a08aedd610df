//! ClubDeck - an interactive terminal demo of the club-management dashboard
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use clubdeck_core::prelude::*;
use clubdeck_core::Role;

/// ClubDeck - an interactive terminal demo of the club-management dashboard
#[derive(Parser, Debug)]
#[command(name = "clubdeck")]
#[command(about = "An interactive terminal demo of the ClubDeck dashboard", long_about = None)]
struct Args {
    /// Starting demo role (super_admin, owner, manager, dj, host, guest)
    #[arg(long, value_name = "ROLE")]
    role: Option<String>,

    /// Start without the launch-offer banner
    #[arg(long)]
    no_banner: bool,
}

fn parse_role(raw: &str) -> Option<Option<Role>> {
    match raw {
        "guest" => Some(None),
        "member" => Some(Some(Role::Member)),
        "vip_member" => Some(Some(Role::VipMember)),
        "host" => Some(Some(Role::Host)),
        "dj" => Some(Some(Role::Dj)),
        "manager" => Some(Some(Role::Manager)),
        "general_manager" => Some(Some(Role::GeneralManager)),
        "owner" => Some(Some(Role::Owner)),
        "super_admin" => Some(Some(Role::SuperAdmin)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let args = Args::parse();

    // Initialize logging (to file, since TUI owns stdout)
    clubdeck_core::logging::init()?;

    // Settings from .clubdeck/config.toml in the working directory,
    // overridden by CLI flags
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let mut settings = clubdeck_app::load_settings(&cwd);

    if let Some(raw) = args.role.as_deref() {
        match parse_role(raw) {
            Some(None) => settings.demo.start_as_guest = true,
            Some(role) => {
                settings.demo.default_role = role;
                settings.demo.start_as_guest = false;
            }
            None => {
                eprintln!("Unknown role: {raw}");
                eprintln!("Valid roles: super_admin, owner, general_manager, manager,");
                eprintln!("             dj, host, vip_member, member, guest");
                std::process::exit(1);
            }
        }
    }
    if args.no_banner {
        settings.demo.show_banner = false;
    }

    let result = clubdeck_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}
