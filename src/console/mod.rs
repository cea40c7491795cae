//! Console command handlers
//!
//! Each handler drives exactly one client flow and reports the outcome to
//! the operator. Errors propagate to the binary boundary untouched, where
//! they surface as a single notification and a non-zero exit.

use std::io::{self, Write as _};

use chrono::{Duration, SecondsFormat, Utc};

use crate::admin::AdminClient;
use crate::admin::client::effective_window;
use crate::admin::types::{AuditLogEntry, Restaurant};
use crate::model::arg::{Command, RestaurantFields};

pub async fn run(command: Command, client: &AdminClient) -> anyhow::Result<()> {
    match command {
        Command::Login { password } => login(client, password).await,
        Command::Add { fields } => add(client, fields).await,
        Command::Get { id } => get(client, &id).await,
        Command::Edit { id, fields } => edit(client, &id, fields).await,
        Command::Remove { id } => remove(client, &id).await,
        Command::Logs { minutes } => logs(client, minutes).await,
    }
}

async fn login(client: &AdminClient, password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    client.login(&password).await?;
    println!("Logged in, session saved");
    Ok(())
}

async fn add(client: &AdminClient, fields: RestaurantFields) -> anyhow::Result<()> {
    let record = record_from_fields(fields);
    client.create_restaurant(&record).await?;
    println!("Restaurant added successfully");
    Ok(())
}

async fn get(client: &AdminClient, id: &str) -> anyhow::Result<()> {
    let restaurant = client.fetch_restaurant(id).await?;
    print_restaurant(&restaurant);
    Ok(())
}

async fn edit(client: &AdminClient, id: &str, fields: RestaurantFields) -> anyhow::Result<()> {
    // Populate from the server first so unset flags keep their values
    let mut record = client.fetch_restaurant(id).await?;
    overlay_fields(&mut record, fields);

    client.update_restaurant(id, &record).await?;
    println!("Restaurant updated successfully");
    Ok(())
}

async fn remove(client: &AdminClient, id: &str) -> anyhow::Result<()> {
    client.remove_restaurant(id).await?;
    println!("Restaurant removed successfully");
    Ok(())
}

async fn logs(client: &AdminClient, minutes: Option<u32>) -> anyhow::Result<()> {
    let entries = client.fetch_audit_logs(minutes).await?;

    let window = effective_window(minutes);
    let since = Utc::now() - Duration::minutes(i64::from(window));
    println!(
        "Audit entries since {} ({} total)",
        since.to_rfc3339_opts(SecondsFormat::Secs, true),
        entries.len()
    );
    print_log_table(&entries);
    Ok(())
}

fn prompt_password() -> anyhow::Result<String> {
    print!("Admin password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Build a fresh record; unset flags become empty fields
fn record_from_fields(fields: RestaurantFields) -> Restaurant {
    let mut record = Restaurant::default();
    overlay_fields(&mut record, fields);
    record
}

/// Apply every flag the operator set, leaving the rest untouched
fn overlay_fields(record: &mut Restaurant, fields: RestaurantFields) {
    let RestaurantFields {
        name,
        address,
        phone,
        website,
        cuisine,
        kosher,
        monday,
        tuesday,
        wednesday,
        thursday,
        friday,
        saturday,
        sunday,
    } = fields;

    if let Some(v) = name {
        record.restaurant_name = v;
    }
    if let Some(v) = address {
        record.address = v;
    }
    if let Some(v) = phone {
        record.phone = v;
    }
    if let Some(v) = website {
        record.website = v;
    }
    if let Some(v) = cuisine {
        record.cuisine_type = v;
    }
    if let Some(v) = kosher {
        record.is_kosher = v;
    }

    let hours = &mut record.opening_hours;
    if let Some(v) = monday {
        hours.monday = v;
    }
    if let Some(v) = tuesday {
        hours.tuesday = v;
    }
    if let Some(v) = wednesday {
        hours.wednesday = v;
    }
    if let Some(v) = thursday {
        hours.thursday = v;
    }
    if let Some(v) = friday {
        hours.friday = v;
    }
    if let Some(v) = saturday {
        hours.saturday = v;
    }
    if let Some(v) = sunday {
        hours.sunday = v;
    }
}

fn print_restaurant(restaurant: &Restaurant) {
    println!("ID:       {}", restaurant.restaurant_id);
    println!("Name:     {}", restaurant.restaurant_name);
    println!("Address:  {}", restaurant.address);
    println!("Phone:    {}", restaurant.phone);
    println!("Website:  {}", restaurant.website);
    println!("Cuisine:  {}", restaurant.cuisine_type);
    println!("Kosher:   {}", restaurant.is_kosher);
    println!("Hours:");
    for (day, hours) in restaurant.opening_hours.iter() {
        println!("  {:<10} {}", day, hours);
    }
}

fn print_log_table(entries: &[AuditLogEntry]) {
    println!(
        "{:<25} {:<30} {:<16} {}",
        "TIMESTAMP", "QUERY", "IP", "COUNTRY"
    );
    for entry in entries {
        println!(
            "{:<25} {:<30} {:<16} {}",
            entry.timestamp, entry.query, entry.ip, entry.country
        );
    }
}
