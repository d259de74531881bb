//! Integration tests for the page model.
//!
//! Tests cover:
//! - Cards, skills and footer built from the built-in content
//! - Independent flip state per card, in either order
//! - Hover and pinned flips, and the drawn face lagging the target face
//! - Skill badges kept in input order, duplicates included

mod common;

use common::*;

#[test]
fn test_builtin_page_contents() -> anyhow::Result<()> {
    // 1. Build the page from the built-in content
    let config = builtin_config();
    let gallery = Gallery::for_projects(&config.content.projects);
    let page = PageModel::build(&config.content, &gallery);

    // 2. Verify the hero
    assert_eq!(page.title, "Hi, I'm Varun Saxena");
    assert!(page.tagline.starts_with("Frontend Developer"));
    let labels: Vec<_> = page.links.iter().map(|link| link.label.as_str()).collect();
    assert_eq!(labels, ["Email", "LinkedIn", "GitHub", "Download Resume"]);

    // 3. Verify three cards in order, all showing their front
    let titles: Vec<_> = page.cards.iter().map(|card| card.front.title).collect();
    assert_eq!(
        titles,
        [
            "Prior Authorization System",
            "Tender Processing Tool",
            "Portfolio Website"
        ]
    );
    assert!(page.cards.iter().all(|card| card.face == Face::Front));
    assert!(page.cards.iter().all(|card| card.front.hint == "Click to flip"));

    // 4. Verify the badges on each card back
    assert_eq!(page.cards[0].back.badges, ["React", "TypeScript", "SSR"]);
    assert_eq!(page.cards[1].back.badges, ["Next.js", "Cypress", "SEO"]);
    assert_eq!(
        page.cards[2].back.badges,
        ["Vite", "Tailwind", "React Three Fiber"]
    );

    // 5. Verify every skill in order
    assert_eq!(
        page.skills,
        [
            "React",
            "Next.js",
            "TypeScript",
            "Node.js",
            "Express",
            "Git",
            "Cypress",
            "Jest",
            "Material UI",
            "Figma",
            "SSR",
            "SEO Optimization",
            "REST APIs",
            "Postman",
            "Tailwind CSS",
        ]
    );

    // 6. No fixed year in the built-in footer: the current year is shown
    assert_eq!(config.content.footer.year, None);
    let year = time::OffsetDateTime::now_utc().year();
    assert_eq!(page.footer, format!("© {year} Varun Saxena"));

    Ok(())
}

#[test]
fn test_cards_flip_independently() -> anyhow::Result<()> {
    let config = builtin_config();

    // 1. Flip card 0 then card 2
    let mut forward = Gallery::for_projects(&config.content.projects);
    forward.toggle(0);
    forward.toggle(2);

    // 2. Flip card 2 then card 0
    let mut backward = Gallery::for_projects(&config.content.projects);
    backward.toggle(2);
    backward.toggle(0);

    // 3. Both orders end with the same faces and card 1 untouched
    for gallery in [&forward, &backward] {
        assert_eq!(gallery.face(0), Some(Face::Back));
        assert_eq!(gallery.face(1), Some(Face::Front));
        assert_eq!(gallery.face(2), Some(Face::Back));
    }

    // 4. Flipping card 0 back leaves card 2 alone
    forward.toggle(0);
    assert_eq!(forward.face(0), Some(Face::Front));
    assert_eq!(forward.face(2), Some(Face::Back));

    Ok(())
}

#[test]
fn test_drawn_face_follows_the_spring() -> anyhow::Result<()> {
    let config = builtin_config();
    let mut gallery = Gallery::for_projects(&config.content.projects);

    // 1. Toggle: the target face changes at once, the drawn face lags
    gallery.toggle(1);
    let page = PageModel::build(&config.content, &gallery);
    assert_eq!(page.cards[1].face, Face::Back);
    assert_eq!(page.cards[1].shown, Face::Front);
    assert!(gallery.is_animating());

    // 2. After settling the back is drawn at full width
    settle(&mut gallery);
    let page = PageModel::build(&config.content, &gallery);
    assert_eq!(page.cards[1].shown, Face::Back);
    assert!(page.cards[1].squash > 0.99);

    Ok(())
}

#[test]
fn test_hover_and_pin() -> anyhow::Result<()> {
    let mut gallery = Gallery::new(2);

    // 1. Hover shows the back, leaving reverts
    gallery.hover(0, true);
    assert_eq!(gallery.face(0), Some(Face::Back));
    gallery.hover(0, false);
    assert_eq!(gallery.face(0), Some(Face::Front));

    // 2. A pinned card stays on its back after the pointer leaves
    gallery.hover(0, true);
    gallery.toggle(0);
    gallery.hover(0, false);
    assert_eq!(gallery.face(0), Some(Face::Back));

    // 3. A tap leaves no hover behind: toggling twice returns to the front
    gallery.toggle(0);
    assert_eq!(gallery.face(0), Some(Face::Front));

    // 4. Unknown cards are ignored
    assert!(!gallery.hover(5, true));
    assert_eq!(gallery.face(1), Some(Face::Front));

    Ok(())
}

#[test]
fn test_two_activations_under_pointer_return_to_front() -> anyhow::Result<()> {
    let config = builtin_config();
    let mut gallery = Gallery::for_projects(&config.content.projects);

    // 1. Pointer enters card 0: the back is previewed
    gallery.hover(0, true);
    assert_eq!(gallery.face(0), Some(Face::Back));

    // 2. First click pins the back
    gallery.toggle(0);
    assert_eq!(gallery.face(0), Some(Face::Back));

    // 3. Second click with the pointer still over the card shows the front
    gallery.toggle(0);
    assert_eq!(gallery.face(0), Some(Face::Front));
    settle(&mut gallery);
    let page = PageModel::build(&config.content, &gallery);
    assert_eq!(page.cards[0].shown, Face::Front);
    assert!(!page.cards[0].pinned);

    // 4. Leaving and re-entering previews the back again
    gallery.hover(0, false);
    gallery.hover(0, true);
    assert_eq!(gallery.face(0), Some(Face::Back));

    Ok(())
}

#[test]
fn test_duplicate_skills_keep_both_badges() -> anyhow::Result<()> {
    let config = SiteConfig::from_toml_str("skills = [\"Rust\", \"Rust\"]")?;
    let gallery = Gallery::for_projects(&config.content.projects);
    let page = PageModel::build(&config.content, &gallery);

    assert_eq!(page.skills, ["Rust", "Rust"]);

    Ok(())
}

#[test]
fn test_empty_content_renders_empty_sections() -> anyhow::Result<()> {
    let config = SiteConfig::from_toml_str("projects = []\nskills = []\nlinks = []")?;
    let gallery = Gallery::for_projects(&config.content.projects);
    let page = PageModel::build(&config.content, &gallery);

    assert!(page.cards.is_empty());
    assert!(page.skills.is_empty());
    assert!(page.links.is_empty());
    assert!(gallery.is_empty());

    Ok(())
}
