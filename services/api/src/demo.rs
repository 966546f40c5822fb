use crate::infra::RecordingGateway;
use clap::Args;
use renthub::application::{
    AdvanceOutcome, ApplicationWizard, DocumentKind, DraftField, ListingSnapshot,
};
use renthub::catalog::{FilterSpec, Listing, ListingCatalog, PriceRange};
use renthub::config::AppConfig;
use renthub::dashboard::TenantDashboard;
use renthub::error::AppError;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ListingSearchArgs {
    /// Minimum bedroom count (0 means any)
    #[arg(long, default_value_t = 0)]
    pub(crate) min_bedrooms: u8,
    /// Minimum bathroom count (0 means any; fractional values allowed)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_bathrooms: f32,
    /// Lower monthly-rent bound, inclusive
    #[arg(long)]
    pub(crate) min_price: Option<u32>,
    /// Upper monthly-rent bound, inclusive
    #[arg(long)]
    pub(crate) max_price: Option<u32>,
    /// Keep only smart-home listings
    #[arg(long)]
    pub(crate) smart_home_only: bool,
    /// Case-insensitive address substring
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Load the catalog from a CSV export instead of the built-in seed data
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load the catalog from a CSV export instead of the built-in seed data
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Skip the application wizard portion of the demo
    #[arg(long)]
    pub(crate) skip_application: bool,
    /// Have the gateway decline the first charge to show the retry path
    #[arg(long)]
    pub(crate) decline_first: bool,
}

fn load_catalog(csv: Option<PathBuf>) -> Result<ListingCatalog, AppError> {
    match csv {
        Some(path) => {
            let file = File::open(path)?;
            Ok(ListingCatalog::from_csv_reader(file)?)
        }
        None => Ok(ListingCatalog::seed()),
    }
}

fn render_listing(listing: &Listing) {
    println!(
        "  [{}] ${}/mo  {} bd / {} ba  {} sqft  {}{}",
        listing.id.0,
        listing.price,
        listing.bedrooms,
        listing.bathrooms,
        listing.square_feet,
        listing.address,
        if listing.smart_home { "  (smart home)" } else { "" },
    );
}

pub(crate) fn run_listing_search(args: ListingSearchArgs) -> Result<(), AppError> {
    let ListingSearchArgs {
        min_bedrooms,
        min_bathrooms,
        min_price,
        max_price,
        smart_home_only,
        query,
        csv,
    } = args;

    let catalog = load_catalog(csv)?;
    let spec = FilterSpec {
        min_bedrooms,
        min_bathrooms,
        price: PriceRange::between(min_price.unwrap_or(0), max_price.unwrap_or(u32::MAX)),
        smart_home_only,
        address_query: query.unwrap_or_default(),
    };

    let matches = catalog.search(&spec);
    println!("{} of {} listings match", matches.len(), catalog.len());
    for listing in &matches {
        render_listing(listing);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        csv,
        skip_application,
        decline_first,
    } = args;

    let config = AppConfig::load()?;
    let catalog = Arc::new(load_catalog(csv)?);

    println!("RentHub leasing demo");
    println!("Catalog: {} listings", catalog.len());

    let spec = FilterSpec {
        min_bedrooms: 3,
        smart_home_only: true,
        ..FilterSpec::default()
    };
    let matches = catalog.search(&spec);
    println!("\nSearch: 3+ bedrooms, smart home only");
    for listing in &matches {
        render_listing(listing);
    }

    println!("\nFeatured shelf");
    for listing in catalog.featured() {
        println!("  [{}] rated {:.1}  {}", listing.id.0, listing.rating, listing.address);
    }

    if let Some(first) = matches.first() {
        if let Some(detail) = catalog.get(&first.id) {
            println!("\nDetail: {}", detail.title);
            println!("  {}", detail.description);
            if !detail.smart_features.is_empty() {
                println!("  Smart features: {}", detail.smart_features.join(", "));
            }
        }
    }

    render_dashboard(&TenantDashboard::seed());

    if skip_application {
        println!("\nApplication wizard skipped (--skip-application)");
        return Ok(());
    }

    let Some(target) = matches
        .first()
        .cloned()
        .or_else(|| catalog.listings().first().cloned())
    else {
        println!("\nCatalog is empty; nothing to apply for");
        return Ok(());
    };

    run_application_demo(&catalog, &target, config.application.fee, decline_first);
    Ok(())
}

fn render_dashboard(dashboard: &TenantDashboard) {
    println!("\nTenant dashboard");
    println!("  Current rental: {}", dashboard.tenancy.address);
    let upcoming = dashboard.next_payment();
    println!("  Next payment: ${} due {}", upcoming.amount, upcoming.due_on);
    println!("  Open maintenance requests:");
    for request in dashboard.open_requests() {
        println!(
            "    #{} {} ({}, opened {})",
            request.id,
            request.title,
            request.status.label(),
            request.opened_on
        );
    }
    println!("  Payment history:");
    for payment in dashboard.payment_history() {
        println!(
            "    ${} on {}  {}",
            payment.amount,
            payment.paid_on,
            payment.status.label()
        );
    }
}

fn run_application_demo(
    catalog: &ListingCatalog,
    target: &Listing,
    fee: u32,
    decline_first: bool,
) {
    println!("\nApplication wizard for listing {}", target.id.0);

    let name = catalog
        .get(&target.id)
        .map(|detail| detail.title.clone())
        .unwrap_or_else(|| target.address.clone());
    let gateway = Arc::new(RecordingGateway::default());
    let mut wizard = ApplicationWizard::new(
        ListingSnapshot {
            id: target.id.clone(),
            name,
        },
        fee,
        gateway.clone(),
    );
    report_step(&wizard);

    let edits = [
        (DraftField::FirstName, "Ann"),
        (DraftField::LastName, "Okafor"),
        (DraftField::Email, "ann@example.com"),
    ];
    for (field, value) in edits {
        wizard.update_field(field, value.to_string());
    }

    // Personal -> Employment -> Financial -> Documents.
    for _ in 0..3 {
        wizard.advance();
    }
    wizard.upload_document(DocumentKind::GovernmentId);
    wizard.upload_document(DocumentKind::ProofOfIncome);

    wizard.advance();
    wizard.update_field(DraftField::CardNumber, "4242424242424242".to_string());
    wizard.update_field(DraftField::CardName, "Ann Okafor".to_string());
    report_step(&wizard);

    if decline_first {
        gateway.set_decline_all(true);
        match wizard.advance() {
            AdvanceOutcome::PaymentFailed(error) => {
                println!("  Payment attempt failed: {error}");
                println!("  Wizard stays on review; retrying with a working card");
            }
            other => println!("  Unexpected outcome: {other:?}"),
        }
        gateway.set_decline_all(false);
    }

    match wizard.advance() {
        AdvanceOutcome::Submitted(receipt) => {
            println!("  Application submitted!");
            println!("    Application ID: {}", receipt.application_id);
            println!("    Fee charged: ${}", receipt.fee_charged);
            println!("    Confirmation: {}", receipt.confirmation_code);
            println!("    Submitted on: {}", receipt.submitted_on);
        }
        other => println!("  Unexpected outcome: {other:?}"),
    }

    println!("  Gateway charge attempts: {}", gateway.charges().len());

    let exit = wizard.return_to_listings();
    println!(
        "  Returned to listings (receipt retained: {})",
        exit.receipt.is_some()
    );
}

fn report_step<G: renthub::application::PaymentGateway>(wizard: &ApplicationWizard<G>) {
    let step = wizard.current_step();
    println!("  Step {}/5: {}", step.number(), step.label());
}
