use blogdex::api::{BlogdexApi, SearchReport};
use blogdex::config::BlogdexConfig;
use blogdex::document::memory::InMemoryDocument;
use blogdex::model::{ALL_CATEGORY, Category, ItemRecord, Mode, Visibility};

fn posts(count: usize) -> Vec<ItemRecord> {
    (1..=count)
        .map(|n| ItemRecord::new("travel", format!("Article {}", n), "a walk"))
        .collect()
}

fn open(items: Vec<ItemRecord>, categories: Vec<Category>) -> BlogdexApi<InMemoryDocument> {
    BlogdexApi::open(
        InMemoryDocument::new(items, categories),
        &BlogdexConfig::default(),
    )
    .unwrap()
}

fn visibilities(api: &BlogdexApi<InMemoryDocument>) -> Vec<Visibility> {
    api.controller().items().iter().map(|i| i.visibility).collect()
}

#[test]
fn first_page_is_min_of_total_and_six() {
    for total in [0, 1, 6, 7, 25] {
        let api = open(posts(total), Vec::new());
        assert_eq!(api.controller().visible_count(), total.min(6));
        assert_eq!(api.document().rendered().load_more_visible, total > 6);
    }
}

#[test]
fn load_more_goes_six_nine_ten_then_stops() {
    let mut api = open(posts(10), Vec::new());
    assert_eq!(api.controller().visible_count(), 6);

    let first = api.reveal_more().unwrap().reveal.unwrap();
    assert_eq!(api.controller().visible_count(), 9);
    assert!(!first.all_loaded);

    let second = api.reveal_more().unwrap().reveal.unwrap();
    assert_eq!(api.controller().visible_count(), 10);
    assert!(second.all_loaded);

    let third = api.reveal_more().unwrap();
    assert!(third.reveal.is_none());
    assert_eq!(api.controller().visible_count(), 10);
    assert!(!api.document().rendered().load_more_visible);
}

#[test]
fn filter_then_all_round_trip() {
    let mut items = vec![
        ItemRecord::new("food", "A", ""),
        ItemRecord::new("travel", "B", ""),
        ItemRecord::new("food", "C", ""),
    ];
    items.extend(posts(6));
    let mut api = open(items, Vec::new());

    api.set_category_filter("food").unwrap();
    let vis = visibilities(&api);
    assert_eq!(
        &vis[..3],
        &[Visibility::Visible, Visibility::Hidden, Visibility::Visible]
    );
    assert_eq!(api.controller().visible_count(), 2);
    assert_eq!(api.controller().mode(), Mode::Filtered);
    assert!(!api.document().rendered().load_more_visible);

    api.set_category_filter(ALL_CATEGORY).unwrap();
    assert_eq!(api.controller().mode(), Mode::Browsing);
    assert_eq!(api.controller().visible_count(), 6);
    assert_eq!(api.controller().pending_count(), 3);
    assert!(api.document().rendered().load_more_visible);
}

#[test]
fn empty_and_unmatched_searches() {
    let mut api = open(posts(3), Vec::new());
    let before = visibilities(&api);

    let empty = api.search("").unwrap();
    assert_eq!(empty.search, Some(SearchReport::MissingQuery));
    assert_eq!(visibilities(&api), before);

    let none = api.search("hoian").unwrap();
    assert_eq!(
        none.search,
        Some(SearchReport::NoResults {
            query: "hoian".into()
        })
    );
    assert_eq!(api.controller().visible_count(), 0);
}

#[test]
fn search_matches_title_and_description_substrings() {
    let mut api = open(
        vec![
            ItemRecord::new("travel", "Hoi An Travel", ""),
            ItemRecord::new("food", "Street Food", "visit hoi an"),
            ItemRecord::new("food", "Choir night", ""),
            ItemRecord::new("food", "Banh Mi", ""),
        ],
        Vec::new(),
    );

    let result = api.search("Hoi").unwrap();
    // "Choir" contains "hoi": matching is substring-based.
    assert_eq!(result.search.unwrap().match_count(), 3);
    assert!(!api.controller().items()[3].is_visible());
}

#[test]
fn location_matches_direct_filter() {
    let items = vec![
        ItemRecord::new("food", "A", ""),
        ItemRecord::new("travel", "B", ""),
        ItemRecord::new("food", "C", ""),
    ];
    let categories = vec![Category::new("food", "Food"), Category::new("travel", "Travel")];

    let mut via_location = open(items.clone(), categories.clone());
    let mut direct = open(items, categories);

    via_location
        .apply_initial_category_from_location("?category=Food")
        .unwrap();
    direct.set_category_filter("food").unwrap();

    assert_eq!(visibilities(&via_location), visibilities(&direct));
    assert_eq!(via_location.document().rendered(), direct.document().rendered());
    assert_eq!(via_location.controller().mode(), Mode::Filtered);
}
