use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use gradient_stops::{presets, AnchorTable, Colormap, ColormapFormat,
                     ColorRange, RGBColor, Sampler, StopSet};
use rgb::RGB8;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        let c = c.to_gray();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Paint the gradient `stops` on a bar `n` cells wide, left to right.
fn bar(fh: &mut impl Write, stops: &StopSet, n: usize,
       width: u32, comment: &str) -> Result<(), Err> {
    let sampler = Sampler::<RGB8>::new(stops)?;
    let colors: Vec<_> = sampler.range(0., 1., n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn colormap(fh: &mut impl Write, text: &str) -> Result<(), Err> {
    writeln!(fh, "<pre>{text}</pre>")?;
    Ok(())
}


fn main() -> Result<(), Err> {
    TermLogger::init(LevelFilter::Debug, Config::default(),
                     TerminalMode::Mixed, ColorChoice::Auto)?;
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Gradient stops: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Presets</h3>")?;
    bar(&mut fh, &presets::RED_GREEN_BLUE, 10, 43, "red, green, blue")?;
    bar(&mut fh, &presets::RED_GREEN_BLUE, 400, 1, "")?;
    bar(&mut fh, &presets::GREYS, 400, 1, "greys")?;

    // What the picker does on clicks: set a color (left button) and
    // clear it (right button).
    writeln!(fh, "<h3>Edited</h3>")?;
    let mut stops = presets::RED_GREEN_BLUE.clone();
    stops.upsert(0.5, presets::YELLOW);
    bar(&mut fh, &stops, 400, 1, "green replaced by yellow")?;
    stops.upsert(0.25, RGB8::new(94, 0, 99));
    stops.upsert(0.75, RGB8::new(255, 235, 170));
    bar(&mut fh, &stops, 400, 1, "two more stops")?;
    stops.remove_at(0.5);
    bar(&mut fh, &stops, 400, 1, "yellow removed")?;
    bar(&mut fh, &stops, 64, 10, "64 cells")?;

    writeln!(fh, "<h3>Colormaps</h3>")?;
    let matlab = Colormap::new().format(ColormapFormat::Matlab)
        .render(&stops)?;
    colormap(&mut fh, &matlab)?;
    colormap(&mut fh, &Colormap::new().linspace(5).render(&stops)?)?;
    let anchors = AnchorTable::parse(0.5, "0.25, 0.5, 0.75")?;
    colormap(&mut fh, &anchors.render(4))?;

    // Nothing to paint until a stop is set.
    stops.clear();
    if let Err(e) = bar(&mut fh, &stops, 400, 1, "") {
        writeln!(fh, "<p>{e}</p>")?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    println!("{matlab}");
    Ok(())
}
