//! Word lists the catalog is generated from on first start.
//!
//! Changing these lists has no effect on an existing database, the catalog is
//! only generated while it is empty.

pub static ADJECTIVES: &[&str] = &[
    "All-in",
    "Caveman",
    "(R)",
    "(D)",
    "Sovi",
    "Sanford",
    "Gambler",
    "Ultimate",
    "Skeleton",
    "Bootlicker",
    "Clanker",
    "Stanker",
    "Deadbeat",
    "Chonky",
    "In 5 Years",
    "Out Night",
    "LAN Party",
    "Wizard",
    "Trucker",
    "NPC",
    "Chicken Jockey",
    "Fishy",
    "Old Yeller",
    "Godlike",
    "Wimpy",
    "Lizard",
    "Trough",
    "English Degree",
    "Minecraft",
];

pub static NOUNS: &[&str] = &[
    "Mitch",
    "Kaden",
    "William",
    "David",
    "Brendan",
    "Victor",
    "Krusk",
    "Stranger",
    "Bimblore",
    "Khulli",
    "Dwayne",
    "Vinkledorf",
    "Chung Pao",
    "Esrit",
    "Ihsoy",
    "Ri'ik",
    "Goobus",
    "beingDevisor",
    "BluePineapple",
    "Ketasive",
    "Mobility Mary",
    "White Whale",
    "Xan",
    "Josh",
    "Wither Skeleton",
    "Wither",
    "Coup Game",
    "Drywall",
];
