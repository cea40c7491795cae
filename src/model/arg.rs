use clap::{Parser, Subcommand};

/// Restaurant directory admin console
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Session file path (overrides the configured path)
    #[arg(long)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the admin password and start a session
    Login {
        /// Admin password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a restaurant listing
    Add {
        #[command(flatten)]
        fields: RestaurantFields,
    },

    /// Fetch a restaurant listing by ID
    Get {
        /// Server-assigned restaurant ID
        id: String,
    },

    /// Update an existing restaurant listing
    ///
    /// Fetches the current record first; only the flags given here change.
    Edit {
        /// Server-assigned restaurant ID
        id: String,

        #[command(flatten)]
        fields: RestaurantFields,
    },

    /// Delete a restaurant listing
    Remove {
        /// Server-assigned restaurant ID
        id: String,
    },

    /// Show the audit log
    Logs {
        /// Trailing window in minutes (default: 1440, the last 24 hours)
        #[arg(long)]
        minutes: Option<u32>,
    },
}

/// One flag per listing field
///
/// Unset flags stay empty on `add` and keep the server's value on `edit`.
#[derive(clap::Args, Debug, Default)]
pub struct RestaurantFields {
    /// Restaurant name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    /// Cuisine category
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Kosher flag ("true" or "false")
    #[arg(long)]
    pub kosher: Option<bool>,

    /// Opening hours, e.g. "9:00-17:00"
    #[arg(long)]
    pub monday: Option<String>,

    #[arg(long)]
    pub tuesday: Option<String>,

    #[arg(long)]
    pub wednesday: Option<String>,

    #[arg(long)]
    pub thursday: Option<String>,

    #[arg(long)]
    pub friday: Option<String>,

    #[arg(long)]
    pub saturday: Option<String>,

    #[arg(long)]
    pub sunday: Option<String>,
}
