use maud::{html, Markup};

pub fn search_box(query: &str) -> Markup {
    html! {
        form class="search-box" method="get" action="/search" style="display: flex; gap: 8px; margin: 1rem 0;" {
            label class="sr-only" for="q" { "Cari properti" }
            input
                type="search"
                id="q"
                name="q"
                value=(query)
                placeholder="contoh: rumah 3 kamar tidur dekat sekolah budget 500 juta"
                style="flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 4px;";
            button type="submit" class="primary" { "Cari" }
        }
    }
}
