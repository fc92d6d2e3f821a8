#![doc = r#"
circlegrid — printable circle-drawing exercise sheets.

Generates a four-page A4 PDF of circle grids for a simple motor-skill drawing
exercise. Each page is labeled with the covered eye (patch) and the drawing hand
(pen); odd pages use the left-hand circle diameter and even pages the right-hand one.

| page | patch | pen   | diameter |
|------|-------|-------|----------|
| 1    | Left  | Left  | left     |
| 2    | Left  | Right | right    |
| 3    | Right | Left  | left     |
| 4    | Right | Right | right    |

Quick start: write a sheet to disk
----------------------------------
```rust,no_run
use std::path::PathBuf;
use chrono::Local;
use circlegrid::{generate_sheet_to_path, SheetParams};

fn main() -> circlegrid::Result<()> {
    let params = SheetParams {
        left_diameter: 20.0,
        right_diameter: 15.0,
        date: "today".to_string(),
        output: PathBuf::from("circles.pdf"),
        layout_json: None,
    };
    let report = generate_sheet_to_path(&params, Local::now().date_naive())?;
    println!("circles per page: {:?}", report.circles_per_page);
    Ok(())
}
```

Lay out pages in memory
-----------------------
```rust
use circlegrid::{generate_pages, Side};

fn main() -> circlegrid::Result<()> {
    let pages = generate_pages(20.0, 10.0, "2024-01-01")?;
    assert_eq!(pages.len(), 4);
    assert_eq!(pages[1].pen, Side::Right);
    assert_eq!(
        pages[0].header(),
        "Left Eye Patched, Pen in Left Hand | 2024-01-01 | Diameter: 20.0mm"
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `circlegrid::Result<T>`. Diameters must be finite and
strictly positive, otherwise `Error::InvalidParameter` is returned before anything
is written.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — date resolution, parameters and the page/grid layout.
- [`io`] — PDF and JSON sidecar writers.
- [`types`] — `Side`, `Circle`, `PageSpec`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::date::{resolve_date, resolve_date_local};
pub use crate::core::params::SheetParams;
pub use error::{Error, Result};
pub use types::{Circle, PageSpec, Side};

pub use io::{LayoutSidecar, render_pdf, write_layout_sidecar, write_pdf};

pub use api::{SheetReport, generate_pages, generate_sheet_to_path, generate_sheet_to_path_local};
