use petrol_news::grouping::{group_items, FIXED_CATEGORIES};
use petrol_news::ranking::rank_and_truncate;
use petrol_news::Item;

fn item(link: &str, category: &str, published_sort: f64) -> Item {
    Item {
        title: format!("Title {}", link),
        link: link.to_string(),
        summary: String::new(),
        category: category.to_string(),
        feed_name: "News".to_string(),
        source_host: "example.com".to_string(),
        published_utc: String::new(),
        published_sort,
    }
}

#[test]
fn test_sorted_newest_first() {
    let items = vec![
        item("a", "news", 100.0),
        item("b", "news", 300.0),
        item("c", "news", 200.0),
    ];

    let ranked = rank_and_truncate(items, 120);

    let links: Vec<_> = ranked.iter().map(|i| i.link.as_str()).collect();
    assert_eq!(links, vec!["b", "c", "a"]);
    assert!(ranked.windows(2).all(|w| w[0].published_sort >= w[1].published_sort));
}

#[test]
fn test_equal_timestamps_keep_collection_order() {
    let items = vec![
        item("first", "news", 50.0),
        item("newest", "news", 90.0),
        item("second", "news", 50.0),
        item("third", "news", 50.0),
    ];

    let ranked = rank_and_truncate(items, 120);

    let links: Vec<_> = ranked.iter().map(|i| i.link.as_str()).collect();
    assert_eq!(links, vec!["newest", "first", "second", "third"]);
}

#[test]
fn test_pool_is_capped() {
    let items: Vec<Item> = (0..200).map(|i| item(&i.to_string(), "news", i as f64)).collect();

    let ranked = rank_and_truncate(items, 120);

    assert_eq!(ranked.len(), 120);
    assert_eq!(ranked[0].link, "199");
    assert_eq!(ranked[119].link, "80");
}

#[test]
fn test_groups_follow_pool_order() {
    let pool = vec![
        item("m1", "global-motorsport", 5.0),
        item("x1", "rallycross", 4.0),
        item("a1", "sri-lanka-automotive", 3.0),
        item("m2", "global-motorsport", 2.0),
        item("x2", "rallycross", 1.0),
    ];

    let groups = group_items(&pool);

    let motorsport: Vec<_> = groups.get("global-motorsport").iter().map(|i| i.link.as_str()).collect();
    assert_eq!(motorsport, vec!["m1", "m2"]);
    assert_eq!(groups.get("sri-lanka-automotive").len(), 1);
    assert!(groups.get("sri-lanka-motorsport").is_empty());
    assert!(groups.get("unknown").is_empty());

    // Fixed groups first, in page order, then dynamic ones
    let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
    let mut expected: Vec<_> = FIXED_CATEGORIES.iter().map(|c| c.key).collect();
    expected.push("rallycross");
    assert_eq!(keys, expected);

    let extra: Vec<_> = groups.extra_groups().collect();
    assert_eq!(extra.len(), 1);
    assert_eq!(extra[0].items.len(), 2);
}
