use clap::Parser;
use std::path::PathBuf;

use circlegrid::SheetParams;

#[derive(Parser, Debug)]
#[command(name = "circlegrid", version, about = "Circle drawing exercise sheet generator")]
pub struct CliArgs {
    /// Circle diameter (mm) for the left hand to draw
    #[arg(long = "left-diam", default_value_t = 17.0)]
    pub left_diam: f64,

    /// Circle diameter (mm) for the right hand to draw
    #[arg(long = "right-diam", default_value_t = 17.0)]
    pub right_diam: f64,

    /// Custom date in YYYY-MM-DD format, or "today"
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Output PDF path
    #[arg(short, long, default_value = "output.pdf")]
    pub output: PathBuf,

    /// Also write the generated layout as JSON to this path
    #[arg(long)]
    pub layout_json: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_params(&self) -> SheetParams {
        SheetParams {
            left_diameter: self.left_diam,
            right_diameter: self.right_diam,
            date: self.date.clone(),
            output: self.output.clone(),
            layout_json: self.layout_json.clone(),
        }
    }
}
