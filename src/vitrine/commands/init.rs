use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AssetRecord, TraitAttribute};
use crate::store::fs::FileStore;

/// Write the bundled starter catalog. Refuses to overwrite an existing
/// catalog unless `force` is set.
pub fn run(catalog_path: &Path, force: bool) -> Result<CmdResult> {
    let store = FileStore::new(catalog_path);
    let mut result = CmdResult::default();

    if store.exists() && !force {
        result.add_message(CmdMessage::warning(format!(
            "Catalog already exists at {} (use --force to overwrite)",
            catalog_path.display()
        )));
        return Ok(result);
    }

    let records = starter_catalog();
    store.save_all(&records)?;
    result.add_message(CmdMessage::success(format!(
        "Wrote starter catalog with {} records to {}",
        records.len(),
        catalog_path.display()
    )));
    Ok(result)
}

fn flagship(
    id: &str,
    name: &str,
    image: &str,
    description: &str,
    attributes: &[(&str, &str)],
    collection: &str,
    chain: &str,
    mint_date: &str,
) -> AssetRecord {
    let mut record = AssetRecord::new(id, name);
    record.image = image.to_string();
    record.description = description.to_string();
    record.attributes = attributes
        .iter()
        .map(|(trait_type, value)| TraitAttribute::new(*trait_type, *value))
        .collect();
    record.collection = Some(collection.to_string());
    record.chain = Some(chain.to_string());
    record.mint_date = Some(mint_date.to_string());
    record
}

/// Six well-known assets plus twenty generated samples, enough to
/// exercise every filter and a few pages of results out of the box.
fn starter_catalog() -> Vec<AssetRecord> {
    let mut records = vec![
        flagship(
            "1",
            "CryptoPunk #1234",
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop",
            "A rare CryptoPunk with unique traits",
            &[("Type", "Male"), ("Accessory", "Mohawk"), ("Eyes", "Sunglasses")],
            "CryptoPunks",
            "Ethereum",
            "2021-06-12",
        ),
        flagship(
            "2",
            "Bored Ape #5678",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=400&fit=crop",
            "A unique Bored Ape with golden fur",
            &[("Background", "Blue"), ("Fur", "Golden"), ("Eyes", "Laser Eyes")],
            "Bored Ape Yacht Club",
            "Ethereum",
            "2021-04-23",
        ),
        flagship(
            "3",
            "Art Blocks #9012",
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=400&h=400&fit=crop",
            "Generative art masterpiece",
            &[
                ("Color Palette", "Vibrant"),
                ("Complexity", "High"),
                ("Style", "Abstract"),
            ],
            "Art Blocks",
            "Ethereum",
            "2023-01-15",
        ),
        flagship(
            "4",
            "Azuki #3456",
            "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=400&h=400&fit=crop",
            "Anime-inspired character",
            &[("Type", "Human"), ("Hair", "Pink"), ("Clothing", "Hoodie")],
            "Azuki",
            "Ethereum",
            "2022-01-12",
        ),
        flagship(
            "5",
            "Doodles #7890",
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=400&h=400&fit=crop",
            "Colorful doodle character",
            &[("Body", "Rainbow"), ("Head", "Bucket"), ("Face", "Happy")],
            "Doodles",
            "Ethereum",
            "2021-10-17",
        ),
        flagship(
            "6",
            "Moonbirds #1111",
            "https://images.unsplash.com/photo-1518770660439-4636190af475?w=400&h=400&fit=crop",
            "Pixel art bird",
            &[("Beak", "Small"), ("Body", "Crescent"), ("Background", "Gray")],
            "Moonbirds",
            "Ethereum",
            "2022-04-16",
        ),
    ];

    for i in 0..20usize {
        let n = i + 7;
        let mut record = AssetRecord::new(n.to_string(), format!("Sample NFT #{n}"));
        record.image = format!(
            "https://images.unsplash.com/photo-{}?w=400&h=400&fit=crop",
            1_500_000_000_000u64 + i as u64
        );
        record.description = format!("Description for sample NFT {n}");
        record.attributes = vec![
            TraitAttribute::new("Rarity", if i % 3 == 0 { "Rare" } else { "Common" }),
            TraitAttribute::new("Generation", format!("Gen {}", i / 5 + 1)),
        ];
        record.collection = Some(format!("Collection {}", i / 3 + 1));
        record.chain = Some(if i % 2 == 0 { "Ethereum" } else { "Polygon" }.to_string());
        record.mint_date = Some(format!("2023-{:02}-{:02}", i % 12 + 1, i % 28 + 1));
        records.push(record);
    }

    records
}
