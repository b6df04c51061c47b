use crate::types::Item;

/// One of the fixed page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
}

/// Page sections, in rendering order
pub const FIXED_CATEGORIES: [Category; 4] = [
    Category {
        key: "sri-lanka-motorsport",
        title: "Sri Lanka Motorsport",
    },
    Category {
        key: "sri-lanka-automotive",
        title: "Sri Lanka Automotive",
    },
    Category {
        key: "global-motorsport",
        title: "Global Motorsport",
    },
    Category {
        key: "global-automotive",
        title: "Global Automotive",
    },
];

pub fn is_fixed_category(key: &str) -> bool {
    FIXED_CATEGORIES.iter().any(|c| c.key == key)
}

#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub key: &'a str,
    pub items: Vec<&'a Item>,
}

/// Items partitioned by category. The four fixed groups always exist (possibly empty)
/// and come first; any other category gets its own group in first-seen order.
#[derive(Debug, Clone)]
pub struct CategoryGroups<'a> {
    groups: Vec<CategoryGroup<'a>>,
}

impl<'a> CategoryGroups<'a> {
    pub fn get(&self, key: &str) -> &[&'a Item] {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    /// Groups outside the fixed sections
    pub fn extra_groups(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter().filter(|g| !is_fixed_category(g.key))
    }
}

/// Partition a ranked pool; order inside each group follows the pool.
pub fn group_items(items: &[Item]) -> CategoryGroups<'_> {
    let mut groups: Vec<CategoryGroup<'_>> = FIXED_CATEGORIES
        .iter()
        .map(|c| CategoryGroup {
            key: c.key,
            items: Vec::new(),
        })
        .collect();

    for item in items {
        match groups.iter_mut().find(|g| g.key == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                key: &item.category,
                items: vec![item],
            }),
        }
    }

    CategoryGroups { groups }
}
