use core_types::MenuEntry;

pub const HOME_ENTRY_ID: &str = "home";

const ARTICLES: &str = "/article?_format=json";

fn article(id: &str, title: &str) -> MenuEntry {
    MenuEntry::new(id, title)
        .with_endpoint(ARTICLES)
        .with_filter(title)
}

fn collection(id: &str, title: &str, path: &str) -> MenuEntry {
    MenuEntry::new(id, title).with_endpoint(format!("/{path}?_format=json"))
}

pub fn left_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(HOME_ENTRY_ID, "Home"),
        collection("events", "Events", "events"),
        collection("activities", "Activities", "activities"),
        MenuEntry::new("temple-menu", "Temple").with_children(vec![
            article("temple", "Temple"),
            article("priest", "Priest"),
            collection("prayers", "Prayers", "prayers"),
        ]),
    ]
}

pub fn right_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("about-menu", "About Us").with_children(vec![
            article("about-us", "About Us"),
            article("objectives", "Objectives"),
            collection("trustees", "Trustees", "trustees"),
            article("legal", "Legal"),
        ]),
        MenuEntry::new("services-menu", "Services").with_children(vec![
            collection("services", "Services", "services"),
            article("school-visits", "School Visits"),
        ]),
        MenuEntry::new("join-us", "Join Us").with_children(vec![
            collection("members", "Members", "booking-forms"),
            article("volunteer", "Volunteer"),
        ]),
        MenuEntry::new("more", "More").with_children(vec![
            collection("gallery", "Gallery", "gallery-events"),
            collection("blog", "Blog", "blog"),
            article("contact", "Contact"),
            collection("announcements", "Announcements", "announcements"),
            collection("festivals", "Festivals", "festival-announcements"),
        ]),
    ]
}
