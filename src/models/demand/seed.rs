use super::types::{Demand, DemandStatus};

fn demand(
    id: &str,
    title: &str,
    description: &str,
    upvotes: u32,
    downvotes: u32,
    category: &str,
    status: DemandStatus,
) -> Demand {
    Demand {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        upvotes,
        downvotes,
        status,
        reviews: Vec::new(),
    }
}

/// The fixed catalogue loaded at startup: five operational shops plus the
/// demands currently in the pipeline. There is no other creation path.
pub fn initial_demands() -> Vec<Demand> {
    vec![
        demand(
            "shop-1",
            "KFC Campus Express",
            "Quick service restaurant providing student-favorite meals and late-night snacks.",
            1200,
            20,
            "Food",
            DemandStatus::Completed,
        ),
        demand(
            "shop-2",
            "Varsity Sports Hub",
            "Official campus dealer for sports gear, gym apparel, and high-performance equipment.",
            400,
            15,
            "Sports",
            DemandStatus::Completed,
        ),
        demand(
            "shop-3",
            "Brew & Bean Cafe",
            "Specialty coffee, artisan pastries, and a quiet corner for casual meetings.",
            950,
            10,
            "Food",
            DemandStatus::Completed,
        ),
        demand(
            "shop-4",
            "Digital Tech Mart",
            "Electronics shop offering student discounts on laptops, accessories, and certified repair services.",
            600,
            30,
            "Shops",
            DemandStatus::Completed,
        ),
        demand(
            "shop-5",
            "Guardian Pharmacy",
            "On-campus health supplies, prescriptions, and essential wellness products.",
            300,
            5,
            "Health",
            DemandStatus::Completed,
        ),
        demand(
            "3",
            "Shuttle Express Frequency",
            "Demand for 10-minute interval shuttles between North and South campus gates.",
            310,
            89,
            "Transport",
            DemandStatus::Pending,
        ),
        demand(
            "5",
            "Campus-Wide Mesh Wi-Fi",
            "High-speed internet coverage across all outdoor quads and social areas.",
            560,
            5,
            "Technology",
            DemandStatus::InReview,
        ),
    ]
}
