use crate::TileAddress;

/// Fills the `{x}`, `{y}` and `{z}` placeholders of a tile URL template.
///
/// The `${x}` form used by some mapping libraries is accepted as well.
///
/// ```
/// # use tile_grid_utils::{TileAddress, expand_url};
/// let addr = TileAddress { x: 3, y: 5, z: 2 };
/// assert_eq!(
///     expand_url("https://tiles.example.org/{z}/{x}/{y}.png", &addr),
///     "https://tiles.example.org/2/3/5.png"
/// );
/// ```
#[must_use]
pub fn expand_url(template: &str, addr: &TileAddress) -> String {
    let (x, y, z) = (addr.x.to_string(), addr.y.to_string(), addr.z.to_string());
    template
        .replace("${x}", &x)
        .replace("${y}", &y)
        .replace("${z}", &z)
        .replace("{x}", &x)
        .replace("{y}", &y)
        .replace("{z}", &z)
}
