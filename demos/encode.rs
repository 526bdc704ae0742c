use spdlib::{
    formats::json::Json,
    process,
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: JSON-запросы из stdin -> результаты построчно в stdout
    env_logger::init();
    let reqs = Json::read(std::io::BufReader::new(std::io::stdin()))?;
    let outcomes: Vec<_> = reqs.iter().map(process).collect();
    Json::write(std::io::stdout(), &outcomes)?;
    Ok(())
}
