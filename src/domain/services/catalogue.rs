/// 可搜尋的目錄樹節點
pub trait CatalogueTree: Sized {
    type Key: Clone;

    fn title(&self) -> &str;
    fn key(&self) -> Self::Key;
    fn children(&self) -> &[Self];
}

/// 深度優先搜尋標題包含 `title_substring` 的所有節點 (區分大小寫)。
///
/// 子節點先於父節點回報，兄弟節點依原順序。有多個結果時由呼叫端決定取哪一個。
pub fn find_keys<N: CatalogueTree>(roots: &[N], title_substring: &str) -> Vec<N::Key> {
    let mut keys = Vec::new();
    for root in roots {
        collect_matches(root, title_substring, &mut keys);
    }
    keys
}

fn collect_matches<N: CatalogueTree>(node: &N, title_substring: &str, keys: &mut Vec<N::Key>) {
    for child in node.children() {
        collect_matches(child, title_substring, keys);
    }
    if node.title().contains(title_substring) {
        keys.push(node.key());
    }
}
