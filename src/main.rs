use std::env;

use log::debug;

use techcard_import::TechCardImporter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional spreadsheet id and gid from command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut importer = TechCardImporter::builder().with_fallback();
    if let Some(id) = args.get(1) {
        importer = importer.spreadsheet_id(id.as_str());
    }
    if let Some(gid) = args.get(2) {
        importer = importer.sheet_gid(gid.as_str());
    }

    let recipes = importer.build().await?;
    debug!("Loaded {} technical card(s)", recipes.len());

    println!("{}", serde_json::to_string_pretty(&recipes)?);

    Ok(())
}
