// SPDX-License-Identifier: GPL-3.0-or-later
use aqcore::brush::BrushKind;
use std::path::PathBuf;

xflags::xflags! {
    /// Paint brush strokes onto a blank canvas and save it as an image.
    cmd aquarelle-render {
        /// Print extra debugging information.
        optional -V,--verbose
        /// List the available brushes and their default settings, then exit.
        optional -l,--list-brushes
        /// Canvas width in pixels. Default is 256.
        optional -W,--canvas-width canvas_width: usize
        /// Canvas height in pixels. Default is 256.
        optional -H,--canvas-height canvas_height: usize
        /// Canvas background color as #rrggbb or #aarrggbb. Default is white.
        optional --background background: String
        /// Store the canvas premultiplied while painting.
        optional --premultiplied
        /// Brush type, 'basic' or 'water' (the default).
        optional -b,--brush brush: BrushKind
        /// JSON file with brush settings. Command line options override it.
        optional -s,--settings settings: PathBuf
        /// Brush color as #rrggbb or #aarrggbb.
        optional -c,--color color: String
        /// Brush width.
        optional -w,--width width: i32
        /// Brush opacity in percent.
        optional -t,--thickness thickness: i32
        /// Water brush dilution.
        optional --water water: i32
        /// How far the water brush's picked up color reaches.
        optional --extend extend: i32
        /// Percentage of brush color mixed into the picked up color.
        optional --mixin mixin: i32
        /// Output image file.
        optional -o,--out out: PathBuf
        /// Strokes to paint, each given as 'X,Y;X,Y;...'.
        repeated strokes: String
    }
}
