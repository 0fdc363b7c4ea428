#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    itinerary_pdf_server::run().await
}
