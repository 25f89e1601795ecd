//! Regions command implementation

use crate::models::RegionDisplay;
use crate::output::table;

/// Print the site-to-search-endpoint table
pub fn run() {
    println!("{}", table::format_table(&RegionDisplay::all()));
    println!("Sites not listed are searched at their own URL.");
}
