//! Command-line surface of the `astro-front` binary

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shared::models::{Role, RoomStatus};
use shared::search::Facet;

#[derive(Debug, Parser)]
#[command(name = "astro-front", author, version, about = "Astro Ciater booking front-end")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "ASTRO_API_URL")]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log in with these credentials before running an admin command
    #[arg(long, global = true, env = "ASTRO_EMAIL")]
    pub email: Option<String>,

    #[arg(long, global = true, env = "ASTRO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a URL path and render its page
    Open { path: String },

    /// Manage rooms
    #[command(subcommand)]
    Rooms(RoomsCommand),

    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Search available rooms for a stay
    Search(SearchArgs),

    /// Log in with --email/--password and show the session
    Login,

    /// Show the admin dashboard
    Dashboard,

    /// Show my bookings
    Bookings,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// available, occupied, maintenance or all
        #[arg(long, default_value = "all")]
        status: Facet<RoomStatus>,
        #[arg(long = "type", default_value = "all")]
        room_type: Facet<String>,
    },
    Create(RoomFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: RoomFields,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Room form inputs; omitted fields keep the form's current value
#[derive(Debug, Default, Args)]
pub struct RoomFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub room_number: Option<String>,
    #[arg(long = "type")]
    pub room_type: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub bed: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
    /// Weekday price
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub price_weekend: Option<String>,
    #[arg(long)]
    pub status: Option<RoomStatus>,
    /// Replaces the facility set; repeat for each label
    #[arg(long = "facility")]
    pub facilities: Vec<String>,
    /// Image file path or URL; repeat for several
    #[arg(long = "image")]
    pub images: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        role: Facet<Role>,
    },
    Create(UserFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: UserFields,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Default, Args)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub user_email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Leave out on update to keep the current password
    #[arg(long)]
    pub user_password: Option<String>,
    #[arg(long)]
    pub role: Option<Role>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub check_in: NaiveDate,
    #[arg(long)]
    pub check_out: NaiveDate,
    #[arg(long, default_value_t = 1)]
    pub rooms: u32,
    #[arg(long, default_value_t = 1)]
    pub adults: u32,
    #[arg(long, default_value_t = 0)]
    pub children: u32,
    /// Name contains
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long = "type", default_value = "all")]
    pub room_type: Facet<String>,
    /// Search the backend's rooms instead of the showcase
    #[arg(long)]
    pub remote: bool,
    /// Open the quick view of this room id
    #[arg(long)]
    pub view: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_room_create() {
        let cli = Cli::try_parse_from([
            "astro-front",
            "rooms",
            "create",
            "--name",
            "Kabin",
            "--facility",
            "WiFi",
            "--facility",
            "Kitchen",
            "--image",
            "https://img.astro.id/k.jpg",
            "--status",
            "maintenance",
        ])
        .unwrap();
        match cli.command {
            Command::Rooms(RoomsCommand::Create(fields)) => {
                assert_eq!(fields.name.as_deref(), Some("Kabin"));
                assert_eq!(fields.facilities, vec!["WiFi", "Kitchen"]);
                assert_eq!(fields.status, Some(RoomStatus::Maintenance));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "astro-front",
            "search",
            "--check-in",
            "2025-11-02",
            "--check-out",
            "2025-11-05",
            "--adults",
            "3",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.adults, 3);
        assert_eq!(args.room_type, Facet::All);
    }
}
