use anyhow::Result;
use colored::Colorize;
use rhtmx_breadcrumbs::Route;

use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let table = config.route_table();

    if table.is_empty() {
        println!("{}", "No routes configured".yellow());
        println!("Add [[routes]] entries to your config file.");
        return Ok(());
    }

    println!("{}", format!("{} route(s), in match order:", table.len()).bold());
    for route in table.routes() {
        println!("  {}", describe(route));
    }

    Ok(())
}

/// `priority  compiled-pattern  (source)  name  "title"`
pub fn describe(route: &Route) -> String {
    let mut line = format!("{:>5}  {}", route.priority, route.pattern);

    if route.record.pattern != route.pattern {
        line.push_str(&format!("  ({})", route.record.pattern));
    }
    if let Some(name) = &route.record.name {
        line.push_str(&format!("  {}", name));
    }
    if let Some(title) = &route.record.title {
        line.push_str(&format!("  {:?}", title));
    }

    line
}
