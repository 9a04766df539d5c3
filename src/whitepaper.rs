//! The ZIMBEAT token whitepaper as a document tree.

use crate::model::{
    Alignment, Block, CellBorder, CellBorders, CellMargins, CellVAlign, Document,
    DocumentProperties, FieldCode, HeaderFooter, LevelDef, NumberFormat, NumberingDef, Paragraph,
    ParagraphStyle, Rgb, Run, Section, SectionProperties, StyleSheet, Table, TableCell, TableRow,
};

pub const HEADER_TEXT: &str = "ZIMBEAT Token Whitepaper";

pub const BULLET_LIST: &str = "bullet-list";
pub const NUMBERED_LIST: &str = "numbered-list";

const TITLE: &str = "Title";
const HEADING_1: &str = "Heading1";
const HEADING_2: &str = "Heading2";
const LIST_PARAGRAPH: &str = "ListParagraph";

const BLACK: Rgb = [0x00, 0x00, 0x00];
const GREY: Rgb = [0x66, 0x66, 0x66];
const BORDER_GREY: Rgb = [0xCC, 0xCC, 0xCC];
const HEADER_FILL: Rgb = [0xD5, 0xE8, 0xF0];

const BODY_FONT: &str = "Arial";
const BODY_SIZE: u32 = 24;
const TABLE_HEADER_SIZE: u32 = 22;

/// Written as both the created and modified time.
const TIMESTAMP: &str = "2025-01-01T00:00:00Z";

fn title(text: &str) -> Block {
    Block::Paragraph(Paragraph::styled(TITLE, text))
}

fn h1(text: &str) -> Block {
    Block::Paragraph(Paragraph::styled(HEADING_1, text))
}

fn h2(text: &str) -> Block {
    Block::Paragraph(Paragraph::styled(HEADING_2, text))
}

fn body(text: &str) -> Block {
    Block::Paragraph(Paragraph::plain(text))
}

fn blank() -> Block {
    body("")
}

fn bold(text: &str) -> Block {
    Block::Paragraph(Paragraph::new(vec![Run::text(text).bold()]))
}

/// `Label: value` with the label in bold.
fn labelled(label: &str, value: &str) -> Paragraph {
    Paragraph::new(vec![Run::text(label).bold(), Run::text(value)])
}

fn list_item(para: Paragraph, reference: &str) -> Block {
    Block::Paragraph(para.with_style(LIST_PARAGRAPH).in_list(reference, 0))
}

fn bullet(text: &str) -> Block {
    list_item(Paragraph::plain(text), BULLET_LIST)
}

fn bullets(items: &[&str]) -> Vec<Block> {
    items.iter().map(|item| bullet(item)).collect()
}

fn numbered(text: &str) -> Block {
    list_item(Paragraph::plain(text), NUMBERED_LIST)
}

fn centered_grey(text: &str, size: u32) -> Block {
    Block::Paragraph(
        Paragraph::new(vec![Run::text(text).size(size).color(GREY)]).align(Alignment::Center),
    )
}

fn cell(width: u32, paragraph: Paragraph) -> TableCell {
    TableCell {
        width,
        paragraphs: vec![paragraph],
        borders: CellBorders::all(CellBorder::single(1, BORDER_GREY)),
        shading: None,
        v_align: None,
    }
}

/// Three-column table with a shaded repeating header row. The middle column
/// of data rows is centred.
fn data_table(col_widths: [u32; 3], header: [&str; 3], rows: &[[&str; 3]]) -> Block {
    let header_row = TableRow {
        cells: col_widths
            .iter()
            .zip(header)
            .map(|(&width, text)| {
                let para = Paragraph::new(vec![Run::text(text).bold().size(TABLE_HEADER_SIZE)])
                    .align(Alignment::Center);
                TableCell {
                    shading: Some(HEADER_FILL),
                    v_align: Some(CellVAlign::Center),
                    ..cell(width, para)
                }
            })
            .collect(),
        is_header: true,
    };

    let data_rows = rows.iter().map(|row| TableRow {
        cells: col_widths
            .iter()
            .zip(row)
            .enumerate()
            .map(|(i, (&width, text))| {
                let para = Paragraph::plain(*text);
                let para = if i == 1 {
                    para.align(Alignment::Center)
                } else {
                    para
                };
                cell(width, para)
            })
            .collect(),
        is_header: false,
    });

    Block::Table(Table {
        col_widths: col_widths.to_vec(),
        rows: std::iter::once(header_row).chain(data_rows).collect(),
        cell_margins: CellMargins {
            top: 100,
            left: 180,
            bottom: 100,
            right: 180,
        },
    })
}

fn title_page() -> Vec<Block> {
    vec![
        title("ZIMBEAT"),
        title("Token Whitepaper"),
        title("$ZBT - TON Blockchain"),
        centered_grey("A Usage-Driven Utility Token for Music Engagement", 28),
        centered_grey("Version 1.0", 24),
        centered_grey("January 2025", 24),
    ]
}

fn table_of_contents() -> Vec<Block> {
    const ENTRIES: [&str; 26] = [
        "1. Executive Summary",
        "2. Overview",
        "   2.1 What is ZIMBEAT?",
        "   2.2 Why Zimbabwe?",
        "   2.3 Why TON Blockchain?",
        "3. Core Philosophy",
        "4. Token Economics",
        "   4.1 Token Supply",
        "   4.2 Token Allocation",
        "5. Earning Mechanics",
        "   5.1 User Earning Methods",
        "   5.2 Artist Earning Methods",
        "   5.3 Anti-Abuse Measures",
        "6. Spending Mechanics",
        "   6.1 User Spending Options",
        "   6.2 Artist Spending Options",
        "7. Conversion Flow",
        "   7.1 Phase 1: MVP (Off-Chain)",
        "   7.2 Phase 2: TON Integration",
        "   7.3 Phase 3: Full Ecosystem",
        "8. Revenue Loop & Sustainability",
        "9. Smart Contract Architecture",
        "10. Vesting & Token Release Schedule",
        "11. Roadmap",
        "12. Risk Factors",
        "13. Conclusion",
    ];

    let mut blocks = vec![h1("Table of Contents"), blank(), blank()];
    blocks.extend(ENTRIES.iter().map(|entry| body(entry)));
    blocks
}

fn executive_summary() -> Vec<Block> {
    let mut blocks = vec![
        h1("1. Executive Summary"),
        body("ZIMBEAT (ZBT) is a usage-driven utility token built on the TON blockchain, designed to incentivize music engagement and support local artists in Zimbabwe through a Telegram MiniApp platform."),
        blank(),
        body("Unlike traditional memecoins, ZBT is earned through real user activity—not speculation. The token economy flows from users to artists, creating a sustainable circular ecosystem that rewards authentic engagement with music quizzes and content consumption."),
        blank(),
        body("Key highlights:"),
    ];
    blocks.extend(bullets(&[
        "Fixed total supply of 1 billion ZBT tokens",
        "40% allocated to user rewards, 25% to artist rewards",
        "Built on TON blockchain for seamless Telegram integration",
        "Phased rollout from MVP (off-chain) to full blockchain integration",
        "Comprehensive anti-abuse mechanisms to prevent farming",
    ]));
    blocks
}

fn overview() -> Vec<Block> {
    let mut blocks = vec![
        h1("2. Overview"),
        h2("2.1 What is ZIMBEAT?"),
        body("ZIMBEAT is a Telegram MiniApp that combines music quizzes with a reward token economy. Users participate in music quizzes to learn about and engage with local music, earning ZBT tokens in the process. Artists whose music is featured in quizzes and played on the platform also earn ZBT tokens."),
        blank(),
        body("The platform serves three primary purposes:"),
    ];
    blocks.extend(bullets(&[
        "Educate users about Zimbabwean music through gamified quizzes",
        "Reward users for engagement and learning",
        "Provide sustainable revenue streams for local artists",
    ]));
    blocks.extend([
        blank(),
        h2("2.2 Why Zimbabwe?"),
        body("Zimbabwe has a vibrant music scene with talented artists who often struggle with monetization. By creating a platform specifically designed for Zimbabwean music, ZIMBEAT addresses several market gaps:"),
    ]);
    blocks.extend(bullets(&[
        "Limited monetization channels for local artists",
        "High mobile and Telegram penetration in Zimbabwe",
        "Growing youth population interested in music and technology",
        "Need for platforms that celebrate and promote local culture",
    ]));
    blocks.extend([
        blank(),
        h2("2.3 Why TON Blockchain?"),
        body("TON (The Open Network) was selected as the underlying blockchain for several key reasons:"),
    ]);
    blocks.extend(bullets(&[
        "Native Telegram integration through TON Connect",
        "Low transaction fees and fast block times",
        "High scalability capable of supporting millions of users",
        "Growing ecosystem and developer community",
        "User-friendly wallet experience for non-crypto users",
    ]));
    blocks
}

fn core_philosophy() -> Vec<Block> {
    vec![
        h1("3. Core Philosophy"),
        body("The ZIMBEAT token economics design is guided by four fundamental principles:"),
        blank(),
        h2("1. Reward Engagement, Not Speculation"),
        body("ZBT is earned through authentic user activity—participating in quizzes, listening to music, and engaging with content. This ensures that tokens flow to users who are genuinely interacting with the platform, not speculators seeking quick profits."),
        blank(),
        h2("2. Flow from Users to Artists"),
        body("The token economy is designed to circulate from users to artists. Users earn ZBT by engaging with music, then spend it on premium content, boosts, and features—much of which flows back to artists as revenue. This creates a virtuous cycle where user engagement directly supports creators."),
        blank(),
        h2("3. Earn First, Spend Second"),
        body("Tokens are primarily earned through activity before they can be spent. This usage-driven model prevents speculative trading and ensures that the token economy is anchored in real utility rather than market hype."),
        blank(),
        h2("4. Avoid Inflation Abuse"),
        body("Through a fixed supply, daily earning caps, and anti-abuse mechanisms, ZIMBEAT prevents token farming and inflationary pressure that could devalue token holders."),
    ]
}

fn token_economics() -> Vec<Block> {
    let supply = [
        ("Token Name: ", "ZIMBEAT"),
        ("Token Symbol: ", "ZBT"),
        ("Network: ", "TON Blockchain"),
        ("Token Type: ", "Utility / Reward Token"),
        ("Standard: ", "Jetton (TON)"),
        ("Total Supply: ", "1,000,000,000 ZBT (Fixed)"),
    ];

    let mut blocks = vec![h1("4. Token Economics"), h2("4.1 Token Supply"), blank()];
    blocks.extend(
        supply
            .iter()
            .map(|(label, value)| Block::Paragraph(labelled(label, value))),
    );
    blocks.extend([
        blank(),
        h2("4.2 Token Allocation"),
        body("The total supply of 1 billion ZBT is allocated as follows:"),
        blank(),
        data_table(
            [2000, 2000, 5360],
            ["Allocation", "Percentage", "Purpose"],
            &[
                [
                    "User Rewards",
                    "40%",
                    "400M tokens for quiz participation, engagement milestones, and referrals",
                ],
                [
                    "Artist Rewards",
                    "25%",
                    "250M tokens for artists whose songs are used in quizzes and listened to",
                ],
                [
                    "Ecosystem & Growth",
                    "15%",
                    "150M tokens for strategic partnerships, marketing, and platform growth",
                ],
                [
                    "Team & Development",
                    "10%",
                    "100M tokens for team building and ongoing development (vested 12-24 months)",
                ],
                [
                    "Liquidity",
                    "5%",
                    "50M tokens for exchange liquidity and market making",
                ],
                [
                    "Reserve",
                    "5%",
                    "50M tokens reserved for stability and future initiatives",
                ],
            ],
        ),
    ]);
    blocks
}

/// A bold numbered label followed by indented plain-text bullet lines.
fn labelled_points(points: &[(&str, [&str; 2])]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (label, lines) in points {
        blocks.push(bold(label));
        blocks.extend(lines.iter().map(|line| body(&format!("   • {line}"))));
        blocks.push(blank());
    }
    blocks
}

fn earning_mechanics() -> Vec<Block> {
    let mut blocks = vec![
        h1("5. Earning Mechanics"),
        h2("5.1 User Earning Methods"),
        body("Users can earn ZBT tokens through the following activities:"),
        blank(),
    ];
    blocks.extend(labelled_points(&[
        (
            "1. Quiz Answers:",
            [
                "Correct answers: 1-5 ZBT per question",
                "Difficulty-based reward scaling",
            ],
        ),
        (
            "2. Daily Streaks:",
            [
                "Consecutive daily participation bonuses",
                "Multipliers for 7-day, 30-day, and 100-day streaks",
            ],
        ),
        (
            "3. Referrals:",
            [
                "Invite new users and earn ZBT when they complete their first quiz",
                "Bonus for referred user activity in first 30 days",
            ],
        ),
        (
            "4. Listening Milestones:",
            [
                "Rewards for reaching listening thresholds",
                "Anti-bot verification required",
            ],
        ),
    ]));

    blocks.extend([
        h2("5.2 Artist Earning Methods"),
        body("Artists earn ZBT based on their engagement with the platform:"),
        blank(),
    ]);
    blocks.extend(labelled_points(&[
        (
            "1. Quiz Usage:",
            [
                "Tokens earned when songs are featured in quizzes",
                "Proportional to quiz completion rates",
            ],
        ),
        (
            "2. Track Listens:",
            [
                "Payment per verified listen",
                "Fraud detection prevents artificial streaming",
            ],
        ),
        (
            "3. Fan Engagement:",
            [
                "Tokens earned when users interact with artist content",
                "Comments, shares, and likes drive rewards",
            ],
        ),
        (
            "4. Exclusive Content:",
            [
                "When users unlock premium content, artists earn ZBT",
                "Artists set pricing for exclusive materials",
            ],
        ),
    ]));

    blocks.extend([
        h2("5.3 Anti-Abuse Measures"),
        body("To maintain integrity and prevent farming, ZIMBEAT implements several protective measures:"),
        blank(),
    ]);
    let measures = [
        (
            "Daily Earning Cap: ",
            "Maximum of 20 ZBT per user per day to prevent excessive accumulation",
        ),
        (
            "Telegram ID Binding: ",
            "One account per Telegram user prevents multiple accounts",
        ),
        (
            "Randomized Quiz Logic: ",
            "Questions and answers are randomized to prevent pattern exploitation",
        ),
        (
            "Device Fingerprinting: ",
            "Light bot detection to identify automated activity",
        ),
        (
            "Verification Requirements: ",
            "Listening rewards require audio playback verification",
        ),
    ];
    blocks.extend(
        measures
            .iter()
            .map(|(label, text)| list_item(labelled(label, text), BULLET_LIST)),
    );
    blocks
}

/// Numbered options, each followed by its bulleted details.
fn options(items: &[(&str, &[&str])]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (option, details) in items {
        blocks.push(numbered(option));
        blocks.extend(details.iter().map(|d| bullet(&format!("   • {d}"))));
    }
    blocks
}

fn spending_mechanics() -> Vec<Block> {
    let mut blocks = vec![
        h1("6. Spending Mechanics"),
        h2("6.1 User Spending Options"),
        body("Users can spend their earned ZBT on various features and content:"),
        blank(),
    ];
    blocks.extend(options(&[
        (
            "Premium Quiz Modes",
            &[
                "Access exclusive quiz categories",
                "Remove ads from quiz experience",
            ],
        ),
        (
            "Exclusive Artist Content",
            &[
                "Unlock premium tracks, videos, and behind-the-scenes content",
                "Access early releases and demos",
            ],
        ),
        (
            "Quiz Theme Voting",
            &["Vote on upcoming quiz themes and featured artists"],
        ),
        (
            "Merchandise Discounts",
            &["Get discounts on artist merchandise and music products"],
        ),
        (
            "Concert Raffles",
            &["Enter raffles for concert tickets and exclusive events"],
        ),
    ]));
    blocks.extend([
        blank(),
        h2("6.2 Artist Spending Options"),
        body("Artists can spend their earned ZBT to boost visibility and grow their audience:"),
        blank(),
    ]);
    blocks.extend(options(&[
        (
            "Song Boosting",
            &["Boost songs in platform playlists for more visibility"],
        ),
        (
            "Quiz Promotion",
            &["Promote quizzes featuring their music to more users"],
        ),
        (
            "Analytics Access",
            &["Unlock detailed fan analytics and listening data"],
        ),
        (
            "New Release Features",
            &["Pay to feature new releases prominently on the platform"],
        ),
    ]));
    blocks
}

fn conversion_flow() -> Vec<Block> {
    let mut blocks = vec![
        h1("7. Conversion Flow"),
        body("ZIMBEAT follows a phased approach to on-chain integration:"),
        blank(),
        h2("7.1 Phase 1: MVP (Off-Chain)"),
        body("Current phase focuses on user acquisition and product-market fit:"),
        blank(),
    ];
    blocks.extend(bullets(&[
        "Users earn internal points through quiz participation",
        "Internal ledger tracks all user balances and transactions",
        "No blockchain friction ensures smooth onboarding",
        "Focus on user experience and platform stability",
    ]));
    blocks.extend([
        blank(),
        h2("7.2 Phase 2: TON Integration"),
        body("Integration with TON blockchain:"),
        blank(),
    ]);
    blocks.extend(bullets(&[
        "Points convert to ZBT tokens (example: 100 points = 1 ZBT)",
        "TON Connect wallet integration for seamless wallet connection",
        "Manual withdrawal thresholds implemented to manage gas costs",
        "Smart contracts deployed for token management",
    ]));
    blocks.extend([
        blank(),
        h2("7.3 Phase 3: Full Ecosystem"),
        body("Complete on-chain implementation:"),
        blank(),
    ]);
    blocks.extend(bullets(&[
        "All transactions occur on-chain",
        "Advanced smart contract features for complex reward logic",
        "Decentralized treasury and governance mechanisms",
        "Cross-platform integrations and external partnerships",
    ]));
    blocks
}

fn revenue_loop() -> Vec<Block> {
    let steps = [
        ("1. Brands Sponsor Quizzes", "Companies pay in TON to sponsor quiz themes"),
        ("2. Platform Buys ZBT", "Revenue is used to purchase ZBT from the open market"),
        (
            "3. ZBT Redistribution",
            "Purchased ZBT is redistributed to users and artists as rewards",
        ),
        (
            "4. Demand > Supply",
            "Continuous buying pressure from platform revenue supports token value",
        ),
    ];

    let mut blocks = vec![
        h1("8. Revenue Loop & Sustainability"),
        body("ZIMBEAT creates a sustainable circular economy:"),
        blank(),
    ];
    for (step, detail) in steps {
        blocks.extend([body(step), body(&format!("   • {detail}")), blank()]);
    }
    blocks.push(body("This revenue loop ensures that external sponsorship revenue directly benefits the ecosystem by creating buy pressure on ZBT, supporting token value, and providing sustainable rewards for users and artists."));
    blocks
}

fn smart_contracts() -> Vec<Block> {
    let mut blocks = vec![
        h1("9. Smart Contract Architecture"),
        body("The ZBT token smart contract will follow the TON Jetton standard with the following components:"),
        blank(),
        h2("9.1 Token Contract"),
    ];
    blocks.extend(bullets(&[
        "Standard TON Jetton implementation",
        "Fixed supply with no minting function",
        "Secure transfer and approval mechanisms",
        "Batch transfer support for efficient reward distribution",
    ]));
    blocks.extend([blank(), h2("9.2 Reward Distribution Contract")]);
    blocks.extend(bullets(&[
        "Automated reward distribution based on verified activity",
        "Anti-abuse checks integrated into distribution logic",
        "Batch processing for gas efficiency",
    ]));
    blocks.extend([blank(), h2("9.3 Treasury Wallet")]);
    blocks.extend(bullets(&[
        "Multi-sig wallet for ecosystem and liquidity tokens",
        "Time-locked release schedule for strategic initiatives",
        "Transparent on-chain transaction history",
    ]));
    blocks
}

fn vesting() -> Vec<Block> {
    vec![
        h1("10. Vesting & Token Release Schedule"),
        body("To ensure long-term commitment and prevent token dumping, strategic tokens are subject to vesting:"),
        blank(),
        data_table(
            [3120, 3120, 3120],
            ["Allocation", "Vesting Period", "Release Schedule"],
            &[
                [
                    "Team & Development",
                    "12-24 months",
                    "6-month cliff, then monthly linear vesting",
                ],
                [
                    "Artist Incentives",
                    "Performance-based",
                    "Released as engagement milestones are met",
                ],
                [
                    "Ecosystem & Growth",
                    "24 months",
                    "Released quarterly based on roadmap achievements",
                ],
                ["Liquidity", "Immediate", "Deployed to exchanges at TGE"],
            ],
        ),
    ]
}

fn roadmap() -> Vec<Block> {
    let quarters: [(&str, [&str; 4]); 5] = [
        (
            "Q1 2025 - MVP Launch",
            [
                "Launch Telegram MiniApp with quiz functionality",
                "Onboard first wave of Zimbabwean artists",
                "Implement internal point system",
                "Build community on Telegram",
            ],
        ),
        (
            "Q2 2025 - TON Integration",
            [
                "Deploy ZBT smart contracts on TON",
                "Integrate TON Connect wallet",
                "Enable point-to-ZBT conversion",
                "Launch on DEX",
            ],
        ),
        (
            "Q3 2025 - Ecosystem Growth",
            [
                "Premium content marketplace launch",
                "Artist analytics dashboard",
                "Brand sponsorship program",
                "Merchandise integration",
            ],
        ),
        (
            "Q4 2025 - Full Ecosystem",
            [
                "Advanced smart contract features",
                "Decentralized governance implementation",
                "Cross-platform integrations",
                "CEX listings",
            ],
        ),
        (
            "2026+ - Expansion",
            [
                "Expand to other African markets",
                "Launch artist NFT marketplace",
                "Integrate with other music platforms",
                "Live event integration",
            ],
        ),
    ];

    let mut blocks = vec![h1("11. Roadmap")];
    for (i, (milestone, items)) in quarters.iter().enumerate() {
        if i > 0 {
            blocks.push(blank());
        }
        blocks.push(h2(milestone));
        blocks.extend(bullets(items));
    }
    blocks
}

fn risk_factors() -> Vec<Block> {
    let risks = [
        (
            "12.1 Market Adoption Risk",
            "Success depends on widespread adoption by users and artists. If the platform fails to attract sufficient users or artists, the token economy may not achieve sustainability.",
        ),
        (
            "12.2 Regulatory Risk",
            "Cryptocurrency regulations are evolving globally and may impact token operations, trading, or utility. Changes in regulations in Zimbabwe or major markets could affect the project.",
        ),
        (
            "12.3 Technical Risk",
            "Smart contract vulnerabilities, platform bugs, or TON network issues could result in loss of funds or service interruptions. While audits and testing will be conducted, risks remain.",
        ),
        (
            "12.4 Liquidity Risk",
            "Token liquidity depends on exchange listings and market making. Limited liquidity could result in high volatility or difficulty exiting positions.",
        ),
        (
            "12.5 Economic Model Risk",
            "The circular economy model relies on continuous brand sponsorship revenue. Failure to secure sponsors could impact the sustainability of reward distributions.",
        ),
    ];

    let mut blocks = vec![
        h1("12. Risk Factors"),
        body("Investors and participants should be aware of the following risks:"),
    ];
    for (heading, text) in risks {
        blocks.extend([blank(), h2(heading), body(text)]);
    }
    blocks
}

fn conclusion() -> Vec<Block> {
    let paragraphs = [
        "ZIMBEAT represents a new approach to tokenomics—one that prioritizes real utility, authentic engagement, and sustainable growth over speculation.",
        "By creating a platform where tokens are earned through meaningful interaction with music and spent on value-adding features, ZIMBEAT aims to build an ecosystem that truly benefits users and artists alike.",
        "The fixed supply, comprehensive anti-abuse measures, and phased rollout strategy demonstrate a commitment to long-term sustainability and responsible token economics.",
        "As Zimbabwe continues to embrace digital innovation, ZIMBEAT stands ready to empower local artists, educate music lovers, and create a model for community-driven token economies in Africa.",
    ];

    let mut blocks = vec![h1("13. Conclusion")];
    for text in paragraphs {
        blocks.extend([body(text), blank()]);
    }
    blocks.extend([
        body("---"),
        blank(),
        bold("Disclaimer:"),
        body("This whitepaper is for informational purposes only and does not constitute financial advice. Participation in the ZIMBEAT platform and acquisition of ZBT tokens involves risks. Readers should conduct their own research and consult with financial advisors before making investment decisions."),
    ]);
    blocks
}

fn heading_style(id: &str, name: &str, size: u32, before: u32, level: u8) -> ParagraphStyle {
    ParagraphStyle {
        based_on: Some("Normal".into()),
        next: Some("Normal".into()),
        quick_format: true,
        font_name: Some(BODY_FONT.into()),
        font_size: Some(size),
        bold: true,
        color: Some(BLACK),
        space_before: Some(before),
        space_after: Some(120),
        outline_level: Some(level),
        ..ParagraphStyle::new(id, name)
    }
}

fn style_sheet() -> StyleSheet {
    let normal = ParagraphStyle {
        quick_format: true,
        ..ParagraphStyle::new("Normal", "Normal")
    };
    let title = ParagraphStyle {
        based_on: Some("Normal".into()),
        font_name: Some(BODY_FONT.into()),
        font_size: Some(56),
        bold: true,
        color: Some(BLACK),
        space_before: Some(240),
        space_after: Some(120),
        alignment: Some(Alignment::Center),
        ..ParagraphStyle::new(TITLE, "Title")
    };
    let list_paragraph = ParagraphStyle {
        based_on: Some("Normal".into()),
        quick_format: true,
        indent_left: Some(720),
        ..ParagraphStyle::new(LIST_PARAGRAPH, "List Paragraph")
    };

    StyleSheet {
        default_font: BODY_FONT.into(),
        default_size: BODY_SIZE,
        paragraph_styles: vec![
            normal,
            title,
            heading_style(HEADING_1, "Heading 1", 32, 240, 0),
            heading_style(HEADING_2, "Heading 2", 28, 180, 1),
            heading_style("Heading3", "Heading 3", 26, 120, 2),
            list_paragraph,
        ],
    }
}

fn single_level_list(reference: &str, format: NumberFormat, text: &str) -> NumberingDef {
    NumberingDef {
        reference: reference.into(),
        levels: vec![LevelDef {
            level: 0,
            format,
            text: text.into(),
            alignment: Alignment::Left,
            start: 1,
            indent_left: 720,
            indent_hanging: 360,
        }],
    }
}

fn running_header() -> HeaderFooter {
    HeaderFooter {
        paragraphs: vec![
            Paragraph::new(vec![Run::text(HEADER_TEXT).size(20).color(GREY)])
                .align(Alignment::Right),
        ],
    }
}

fn running_footer() -> HeaderFooter {
    HeaderFooter {
        paragraphs: vec![
            Paragraph::new(vec![
                Run::text("Page "),
                Run::field(FieldCode::Page),
                Run::text(" of "),
                Run::field(FieldCode::NumPages),
            ])
            .align(Alignment::Center),
        ],
    }
}

/// Build the complete whitepaper. Pure; nothing is written anywhere.
pub fn whitepaper() -> Document {
    let chapters = [
        title_page(),
        table_of_contents(),
        executive_summary(),
        overview(),
        core_philosophy(),
        token_economics(),
        earning_mechanics(),
        spending_mechanics(),
        conversion_flow(),
        revenue_loop(),
        smart_contracts(),
        vesting(),
        roadmap(),
        risk_factors(),
        conclusion(),
    ];

    let mut blocks = Vec::new();
    for (i, chapter) in chapters.into_iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }
        blocks.extend(chapter);
    }

    Document {
        properties: DocumentProperties {
            title: HEADER_TEXT.into(),
            subject: "A Usage-Driven Utility Token for Music Engagement".into(),
            creator: "ZIMBEAT".into(),
            keywords: "ZIMBEAT, ZBT, TON, Jetton, Telegram MiniApp".into(),
            description: "$ZBT - TON Blockchain".into(),
            timestamp: TIMESTAMP.into(),
        },
        styles: style_sheet(),
        numbering: vec![
            single_level_list(BULLET_LIST, NumberFormat::Bullet, "•"),
            single_level_list(NUMBERED_LIST, NumberFormat::Decimal, "%1."),
        ],
        section: Section {
            properties: SectionProperties {
                header_default: Some(running_header()),
                footer_default: Some(running_footer()),
                ..SectionProperties::default()
            },
            blocks,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(doc: &Document, style: &str) -> Vec<String> {
        doc.paragraphs()
            .filter(|p| p.style.as_deref() == Some(style))
            .map(Paragraph::visible_text)
            .collect()
    }

    #[test]
    fn thirteen_numbered_sections() {
        let doc = whitepaper();
        let h1s = headings(&doc, HEADING_1);
        assert_eq!(h1s.len(), 14, "13 sections plus the table of contents");
        assert_eq!(h1s[0], "Table of Contents");
        for (i, heading) in h1s[1..].iter().enumerate() {
            assert!(
                heading.starts_with(&format!("{}. ", i + 1)),
                "unexpected heading order: {heading}"
            );
        }
    }

    #[test]
    fn title_page_lines() {
        let doc = whitepaper();
        assert_eq!(
            headings(&doc, TITLE),
            ["ZIMBEAT", "Token Whitepaper", "$ZBT - TON Blockchain"]
        );
    }

    #[test]
    fn heading_styles_step_down() {
        let styles = style_sheet();
        let sizes: Vec<_> = [HEADING_1, HEADING_2, "Heading3"]
            .iter()
            .map(|id| styles.get(id).and_then(|s| s.font_size))
            .collect();
        assert_eq!(sizes, [Some(32), Some(28), Some(26)]);
        assert_eq!(styles.get(TITLE).and_then(|s| s.alignment), Some(Alignment::Center));
        assert_eq!(styles.get(LIST_PARAGRAPH).and_then(|s| s.indent_left), Some(720));
        assert!(styles.get("Heading4").is_none());
    }

    #[test]
    fn page_break_between_chapters_only() {
        let doc = whitepaper();
        let breaks = doc
            .section
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count();
        assert_eq!(breaks, 14);
        assert!(!matches!(doc.section.blocks.last(), Some(Block::PageBreak)));
    }

    #[test]
    fn list_paragraphs_use_list_style() {
        let doc = whitepaper();
        let listed: Vec<_> = doc.paragraphs().filter(|p| p.list.is_some()).collect();
        assert!(!listed.is_empty());
        for p in listed {
            assert_eq!(p.style.as_deref(), Some(LIST_PARAGRAPH));
        }
    }

    #[test]
    fn table_of_contents_is_plain_text() {
        let doc = whitepaper();
        let text = doc.visible_text();
        assert!(text.contains("\n   7.1 Phase 1: MVP (Off-Chain)\n"));
        assert!(text.contains("\n13. Conclusion\n"));
    }
}
