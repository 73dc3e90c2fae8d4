//! SVG generators.
//!
//! Produces standalone SVG documents: a two-circle Venn diagram with the
//! region labels, and a single frame of the particle field.

use std::path::Path;

use anyhow::{Context, Result};

use setlearn_core::notation::VennRegions;
use setlearn_core::particles::ParticleField;

const VENN_WIDTH: u32 = 500;
const VENN_HEIGHT: u32 = 400;
const PARTICLE_COLOR: &str = "255, 214, 0";

/// Escape a string for safe insertion into SVG text and attributes.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the Venn diagram for the given regions.
pub fn generate_venn_svg(regions: &VennRegions) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{VENN_WIDTH}\" height=\"{VENN_HEIGHT}\" viewBox=\"0 0 {VENN_WIDTH} {VENN_HEIGHT}\">\n"
    ));
    svg.push_str(&format!(
        "<rect width=\"{VENN_WIDTH}\" height=\"{VENN_HEIGHT}\" fill=\"#1a1a2e\"/>\n"
    ));

    // Circles
    svg.push_str("<g id=\"venn-circles\">\n");
    svg.push_str("<circle cx=\"190\" cy=\"200\" r=\"130\" fill=\"rgba(255, 214, 0, 0.25)\" stroke=\"#ffd600\" stroke-width=\"2\"/>\n");
    svg.push_str("<circle cx=\"310\" cy=\"200\" r=\"130\" fill=\"rgba(0, 180, 255, 0.25)\" stroke=\"#00b4ff\" stroke-width=\"2\"/>\n");
    svg.push_str("<text x=\"110\" y=\"60\" text-anchor=\"middle\" font-size=\"20\" fill=\"white\">A</text>\n");
    svg.push_str("<text x=\"390\" y=\"60\" text-anchor=\"middle\" font-size=\"20\" fill=\"white\">B</text>\n");
    svg.push_str("</g>\n");

    // Labels
    svg.push_str("<g id=\"venn-labels\">\n");
    for label in regions.labels() {
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"Vazirmatn\" font-size=\"14\" fill=\"white\">{}</text>\n",
            label.x,
            label.y,
            xml_escape(&label.text)
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str("</svg>\n");
    svg
}

/// Write the Venn diagram to a file.
pub fn write_venn_svg(regions: &VennRegions, path: &Path) -> Result<()> {
    write_svg(&generate_venn_svg(regions), path)
}

/// Generate one frame of the particle field: links first, particles on top.
pub fn generate_particles_svg(field: &ParticleField) -> String {
    let settings = field.settings();
    let particles = field.particles();
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = settings.width,
        h = settings.height
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#0d0d1a\"/>\n");

    svg.push_str("<g id=\"links\" stroke-width=\"0.5\">\n");
    for link in field.links() {
        let (a, b) = (&particles[link.a], &particles[link.b]);
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"rgba({PARTICLE_COLOR}, {:.3})\"/>\n",
            a.x, a.y, b.x, b.y, link.alpha
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        "<g id=\"particles\" fill=\"rgba({PARTICLE_COLOR}, 0.8)\">\n"
    ));
    for p in particles {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
            p.x, p.y, p.size
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str("</svg>\n");
    svg
}

/// Write a particle frame to a file.
pub fn write_particles_svg(field: &ParticleField, path: &Path) -> Result<()> {
    write_svg(&generate_particles_svg(field), path)
}

fn write_svg(svg: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)
        .with_context(|| format!("failed to write SVG to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use setlearn_core::notation::calculate_diagram;
    use setlearn_core::particles::ParticleSettings;

    #[test]
    fn venn_svg_places_each_region() {
        let regions = calculate_diagram("{1, 2, 3}", "{3, 4}").unwrap();
        let svg = generate_venn_svg(&regions);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("x=\"130\" y=\"200\""));
        assert!(svg.contains(">1, 2</text>"));
        assert!(svg.contains("x=\"370\" y=\"200\""));
        assert!(svg.contains(">4</text>"));
        assert!(svg.contains("x=\"250\" y=\"200\""));
        assert!(svg.contains(">3</text>"));
    }

    #[test]
    fn venn_svg_omits_empty_regions() {
        let regions = calculate_diagram("{a}", "{b}").unwrap();
        let svg = generate_venn_svg(&regions);
        assert!(!svg.contains("x=\"250\" y=\"200\""));
    }

    #[test]
    fn venn_svg_escapes_labels() {
        let regions = calculate_diagram("{<b>, a&b}", "").unwrap();
        let svg = generate_venn_svg(&regions);
        assert!(svg.contains("&lt;b&gt;, a&amp;b"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn particle_frame_draws_every_particle() {
        let mut rng = StdRng::seed_from_u64(9);
        let settings = ParticleSettings {
            count: 15,
            ..ParticleSettings::default()
        };
        let field = ParticleField::new(settings, &mut rng);
        let svg = generate_particles_svg(&field);

        assert_eq!(svg.matches("<circle ").count(), 15);
        assert_eq!(svg.matches("<line ").count(), field.links().len());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("venn.svg");
        let regions = calculate_diagram("{x}", "{x}").unwrap();
        write_venn_svg(&regions, &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains(">x</text>"));
    }
}
