use anyhow::Result;
use product_price_scraper::config::Config;
use product_price_scraper::{RunOutcome, logger, run};

fn main() -> Result<()> {
    logger::init(logger::LOG_PATH)?;

    let config = Config::default();
    let mut rng = rand::thread_rng();

    match run(&config, &mut rng) {
        RunOutcome::Scraped(record) => {
            println!("The extracted product is: {}", record.name);
            println!("The extracted price is: ${:.2}", record.price);
        }
        RunOutcome::FetchFailed => println!("Failed to fetch the page."),
        RunOutcome::ExtractFailed => println!("Failed to extract product details."),
    }

    Ok(())
}
