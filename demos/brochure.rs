use chrono::Utc;
use pdf_blocks::model::{Block, BlockContent, BrandKit, ExportData, ListType, Page};
use pdf_blocks::{export_filename, Composer};

fn main() {
    env_logger::init();

    let intro = Page::new("intro", "Why it works")
        .with_block(Block::new(
            "h",
            0,
            BlockContent::Heading {
                text: "Built for busy teams".into(),
                level: 1,
            },
        ))
        .with_block(Block::new(
            "p",
            1,
            BlockContent::Paragraph {
                text: lipsum::lipsum(180),
            },
        ))
        .with_block(Block::new(
            "q",
            2,
            BlockContent::Quote {
                text: lipsum::lipsum(40),
            },
        ))
        .with_block(Block::new(
            "l",
            3,
            BlockContent::List {
                items: (0..5).map(|i| lipsum::lipsum(6 + i * 4)).collect(),
                list_type: ListType::Ordered,
            },
        ));

    let pricing = Page::new("pricing", "Pricing")
        .with_block(Block::new(
            "t",
            0,
            BlockContent::Table {
                headers: vec!["Plan".into(), "Seats".into(), "Price".into()],
                rows: vec![
                    vec!["Starter".into(), "5".into(), "$9".into()],
                    vec!["Team".into(), "25".into(), "$39".into()],
                    vec!["Enterprise".into(), "Unlimited".into(), "Call us".into()],
                ],
            },
        ))
        .with_block(Block::new(
            "i",
            1,
            BlockContent::Image {
                url: "https://example.com/chart.png".into(),
                alt: "Seats per plan".into(),
            },
        ))
        .with_block(Block::new(
            "c",
            2,
            BlockContent::Cta {
                button_text: "Start a free trial".into(),
                url: Some("https://example.com/signup".into()),
            },
        ));

    let data = ExportData::new("Spring Launch Brochure")
        .with_brand_kit(BrandKit {
            primary_color: Some("#0F766E".into()),
            secondary_color: Some("#F59E0B".into()),
            fonts: None,
        })
        .with_page(intro)
        .with_page(pricing);

    let bytes = Composer::default().render(&data).expect("can render brochure");
    let path = export_filename(&data.project_title, Utc::now());
    std::fs::write(&path, bytes).expect("can write pdf");
    println!("wrote {path}");
}
