use gridpath_core::{GridMap, Point};

/// Draw `map` as text with `path` overlaid: `S` start, `G` goal, `*` for
/// the cells in between. Path cells outside the map are ignored.
pub fn render(map: &GridMap, path: &[Point]) -> String {
    let w = map.width() as usize;
    let mut glyphs: Vec<char> = map.cells().iter().map(|c| c.glyph()).collect();
    let last = path.len().saturating_sub(1);
    for (i, &p) in path.iter().enumerate() {
        let Some(idx) = map.idx(p) else {
            continue;
        };
        glyphs[idx] = match i {
            0 => 'S',
            _ if i == last => 'G',
            _ => '*',
        };
    }

    let mut out = String::with_capacity(glyphs.len() + map.height() as usize);
    for row in glyphs.chunks(w) {
        out.extend(row);
        out.push('\n');
    }
    out
}
