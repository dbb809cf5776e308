pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = beansec_core::document::document_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
