//! Deterministic families of template configurations
//!
//! Each family enumerates one parametric pattern over an input list, so the
//! same list always yields the same configurations in the same order. None of
//! these touch the registry; the batch feeds them through `create_template`.

use std::fmt;

use crate::template::{
    Category, Difficulty, ParameterSpec, Plugin, SelectOption, TemplateConfig, VariationSpec,
};

/// Entrance direction for the directional families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Animated axis and the signed `gsap.from` start offset that makes the
    /// element travel in this direction
    pub fn offset(&self, distance: f64) -> (&'static str, f64) {
        match self {
            Direction::Up => ("y", distance),
            Direction::Down => ("y", -distance),
            Direction::Left => ("x", distance),
            Direction::Right => ("x", -distance),
        }
    }

    fn lowercase(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

/// A named easing curve used by the springy and ease-swap families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Easing {
    pub label: &'static str,
    pub curve: &'static str,
}

pub const SPRING_EASINGS: [Easing; 3] = [
    Easing {
        label: "Elastic",
        curve: "elastic.out(1, 0.3)",
    },
    Easing {
        label: "Back",
        curve: "back.out(1.7)",
    },
    Easing {
        label: "Bounce",
        curve: "bounce.out",
    },
];

pub const SWAP_EASINGS: [Easing; 3] = [
    Easing {
        label: "Snappy",
        curve: "power4.out",
    },
    Easing {
        label: "Smooth",
        curve: "sine.inOut",
    },
    Easing {
        label: "Springy",
        curve: "elastic.out(1, 0.5)",
    },
];

/// Distance used by the directional fades
pub const FADE_DISTANCE: f64 = 50.0;

fn preview(heading: &str) -> String {
    format!(
        "<div class=\"preview-container\">\n  <div class=\"preview-element\" data-element-id=\"preview\">\n    <h2>{}</h2>\n  </div>\n</div>",
        heading
    )
}

fn duration(default: f64) -> ParameterSpec {
    ParameterSpec::range("duration", default, 0.1, 5.0, 0.1)
        .with_description("Animation duration in seconds")
}

/// One fade-in per direction, offset by ±[`FADE_DISTANCE`]
pub fn directional_fades(directions: &[Direction]) -> Vec<TemplateConfig> {
    directions
        .iter()
        .map(|dir| {
            let (axis, offset) = dir.offset(FADE_DISTANCE);
            let word = dir.lowercase();
            TemplateConfig::new(
                format!("Fade In {}", dir),
                Category::Core,
                "fade",
                format!("Fade an element in while moving it {}", word),
                format!(
                    "gsap.from(\"[data-element-id='{{{{elementId}}}}']\", {{\n  opacity: 0,\n  {}: {{{{distance}}}},\n  duration: {{{{duration}}}},\n  ease: \"power2.out\"\n}})",
                    axis
                ),
                preview(&format!("Fade In {}", dir)),
            )
            .with_parameters(vec![
                ParameterSpec::number("distance", offset)
                    .with_bounds(-500.0, 500.0)
                    .with_description("Start offset in pixels"),
                duration(1.0),
            ])
            .with_tags(["fade", word])
            .with_prompts([
                format!("fade in {}", word),
                format!("fade {} into view", word),
                format!("appear moving {}", word),
            ])
        })
        .collect()
}

/// One slide-in per direction, starting fully off its own box
pub fn directional_slides(directions: &[Direction]) -> Vec<TemplateConfig> {
    directions
        .iter()
        .map(|dir| {
            // starts on the named edge, so it travels away from it
            let (axis, offset) = dir.offset(-100.0);
            let word = dir.lowercase();
            TemplateConfig::new(
                format!("Slide In {}", dir),
                Category::Core,
                "slide",
                format!("Slide an element in from the {} edge", word),
                format!(
                    "gsap.from(\"[data-element-id='{{{{elementId}}}}']\", {{\n  {}Percent: {{{{distance}}}},\n  duration: {{{{duration}}}},\n  ease: \"power3.out\"\n}})",
                    axis
                ),
                preview(&format!("Slide In {}", dir)),
            )
            .with_parameters(vec![
                ParameterSpec::number("distance", offset)
                    .with_bounds(-200.0, 200.0)
                    .with_description("Start offset as a percentage of the element size"),
                duration(0.8),
            ])
            .with_tags(["slide", word])
            .with_prompts([
                format!("slide in {}", word),
                format!("slide from the {}", word),
                format!("enter moving {}", word),
            ])
        })
        .collect()
}

/// Scale-based entrances: scale with rotation, and an elastic pop
pub fn scale_entrances() -> Vec<TemplateConfig> {
    vec![
        TemplateConfig::new(
            "Scale Rotate In",
            Category::Core,
            "scale",
            "Scale an element up while rotating it into place",
            "gsap.from(\"[data-element-id='{{elementId}}']\", {\n  scale: 0,\n  rotation: {{rotation}},\n  duration: {{duration}},\n  ease: \"back.out(1.7)\"\n})",
            preview("Scale Rotate In"),
        )
        .with_parameters(vec![
            ParameterSpec::number("rotation", 180.0).with_bounds(-360.0, 360.0),
            duration(0.8),
        ])
        .with_tags(["scale", "rotate"])
        .with_prompts(["spin and grow in", "rotate while scaling", "twirl into view"]),
        TemplateConfig::new(
            "Elastic Scale In",
            Category::Core,
            "scale",
            "Pop an element in with an elastic overshoot",
            "gsap.from(\"[data-element-id='{{elementId}}']\", {\n  scale: 0,\n  duration: {{duration}},\n  ease: \"elastic.out(1, {{elasticity}})\"\n})",
            preview("Elastic Scale In"),
        )
        .with_parameters(vec![
            ParameterSpec::range("elasticity", 0.3, 0.1, 1.0, 0.05),
            duration(1.2),
        ])
        .with_tags(["scale", "elastic"])
        .with_prompts(["elastic pop in", "bouncy scale entrance", "jelly appear"]),
    ]
}

/// One drop and one pop per spring easing
pub fn springy(easings: &[Easing]) -> Vec<TemplateConfig> {
    let mut configs = Vec::with_capacity(easings.len() * 2);
    for easing in easings {
        let word = easing.label.to_lowercase();
        configs.push(
            TemplateConfig::new(
                format!("{} Drop", easing.label),
                Category::Physics,
                "spring",
                format!("Drop an element into place with a {} settle", word),
                format!(
                    "gsap.from(\"[data-element-id='{{{{elementId}}}}']\", {{\n  y: {{{{height}}}},\n  duration: {{{{duration}}}},\n  ease: \"{}\"\n}})",
                    easing.curve
                ),
                preview(&format!("{} Drop", easing.label)),
            )
            .with_parameters(vec![
                ParameterSpec::number("height", -200.0)
                    .with_bounds(-1000.0, 0.0)
                    .with_description("Starting height above the resting position"),
                duration(1.2),
            ])
            .with_tags(["spring", word.as_str()])
            .with_prompts([
                format!("{} drop", word),
                format!("fall and {}", word),
                "springy landing".to_string(),
            ]),
        );
        configs.push(
            TemplateConfig::new(
                format!("{} Pop", easing.label),
                Category::Physics,
                "spring",
                format!("Press and release an element with a {} rebound", word),
                format!(
                    "gsap.fromTo(\"[data-element-id='{{{{elementId}}}}']\",\n  {{ scale: {{{{squash}}}} }},\n  {{ scale: 1, duration: {{{{duration}}}}, ease: \"{}\" }}\n)",
                    easing.curve
                ),
                preview(&format!("{} Pop", easing.label)),
            )
            .with_parameters(vec![
                ParameterSpec::range("squash", 0.8, 0.1, 1.0, 0.05),
                duration(0.9),
            ])
            .with_tags(["spring", word.as_str()])
            .with_difficulty(Difficulty::Intermediate)
            .with_prompts([
                format!("{} pop", word),
                format!("{} press feedback", word),
                "spring back on click".to_string(),
            ]),
        );
    }
    configs
}

/// Stagger origins for the character-wave family
pub const WAVE_ORIGINS: [&str; 3] = ["start", "center", "end"];

/// Character waves: one per direction (up/down) and stagger origin
pub fn character_waves(origins: &[&str]) -> Vec<TemplateConfig> {
    let mut configs = Vec::with_capacity(origins.len() * 2);
    for dir in [Direction::Up, Direction::Down] {
        let (_, offset) = dir.offset(30.0);
        for origin in origins {
            let origin_title = title_case(origin);
            configs.push(
                TemplateConfig::new(
                    format!("Character Wave {} {}", dir, origin_title),
                    Category::Text,
                    "characters",
                    format!(
                        "Animate characters {} in a wave starting from the {}",
                        dir.lowercase(),
                        origin
                    ),
                    format!(
                        "gsap.registerPlugin(SplitText);\n\nconst split = new SplitText(\"[data-element-id='{{{{elementId}}}}']\", {{ type: \"chars\" }});\ngsap.from(split.chars, {{\n  y: {{{{offset}}}},\n  opacity: 0,\n  duration: {{{{duration}}}},\n  stagger: {{ each: {{{{stagger}}}}, from: \"{}\" }},\n  ease: \"sine.out\"\n}})",
                        origin
                    ),
                    "<div class=\"preview-container\">\n  <h1 data-element-id=\"preview\">Wave Text</h1>\n</div>",
                )
                .with_parameters(vec![
                    ParameterSpec::number("offset", offset).with_bounds(-100.0, 100.0),
                    ParameterSpec::range("stagger", 0.05, 0.01, 0.5, 0.01),
                    duration(0.6),
                ])
                .with_plugins(vec![Plugin::SplitText])
                .with_tags(["text", "wave", dir.lowercase()])
                .with_prompts([
                    format!("character wave from {}", origin),
                    format!("letters ripple {}", dir.lowercase()),
                    "wavy text animation".to_string(),
                ]),
            );
        }
    }
    configs
}

/// Scroll-triggered directional reveals
pub fn scroll_reveals(directions: &[Direction]) -> Vec<TemplateConfig> {
    directions
        .iter()
        .map(|dir| {
            let (axis, offset) = dir.offset(80.0);
            let word = dir.lowercase();
            TemplateConfig::new(
                format!("Scroll Reveal {}", dir),
                Category::ScrollTrigger,
                "reveal",
                format!("Reveal an element moving {} as it scrolls into view", word),
                format!(
                    "gsap.registerPlugin(ScrollTrigger);\n\ngsap.from(\"[data-element-id='{{{{elementId}}}}']\", {{\n  opacity: 0,\n  {}: {{{{distance}}}},\n  duration: {{{{duration}}}},\n  scrollTrigger: {{\n    trigger: \"[data-element-id='{{{{elementId}}}}']\",\n    start: \"top 85%\"\n  }}\n}})",
                    axis
                ),
                preview(&format!("Scroll Reveal {}", dir)),
            )
            .with_parameters(vec![
                ParameterSpec::number("distance", offset).with_bounds(-500.0, 500.0),
                duration(1.0),
            ])
            .with_plugins(vec![Plugin::ScrollTrigger])
            .with_tags(["scroll", "reveal", word])
            .with_prompts([
                format!("reveal {} on scroll", word),
                format!("scroll in moving {}", word),
                format!("slide {} when visible", word),
            ])
        })
        .collect()
}

/// Parallax layers moving at different scroll speeds
pub fn parallax_layers(speeds: &[i32]) -> Vec<TemplateConfig> {
    speeds
        .iter()
        .map(|speed| {
            TemplateConfig::new(
                format!("Parallax Layer {}", speed),
                Category::ScrollTrigger,
                "parallax",
                format!("Parallax layer moving {}% of its height across the scroll", speed),
                "gsap.registerPlugin(ScrollTrigger);\n\ngsap.to(\"[data-element-id='{{elementId}}']\", {\n  yPercent: {{yPercent}},\n  ease: \"none\",\n  scrollTrigger: { scrub: true }\n})",
                preview("Parallax Layer"),
            )
            .with_parameters(vec![ParameterSpec::range(
                "yPercent",
                f64::from(*speed),
                -100.0,
                100.0,
                5.0,
            )])
            .with_plugins(vec![Plugin::ScrollTrigger])
            .with_tags(["scroll", "parallax"])
            .with_prompts([
                format!("parallax speed {}", speed),
                "layered parallax".to_string(),
                "depth layer on scroll".to_string(),
            ])
        })
        .collect()
}

pub const PARALLAX_SPEEDS: [i32; 4] = [-20, -40, -60, -80];

/// Stroke-drawing variants over a list of `(label, drawSVG value)` pairs
pub fn stroke_draws(modes: &[(&str, &str)]) -> Vec<TemplateConfig> {
    modes
        .iter()
        .map(|(label, draw)| {
            TemplateConfig::new(
                format!("Draw Stroke {}", label),
                Category::Svg,
                "draw",
                format!("Draw SVG strokes {}", label.to_lowercase()),
                format!(
                    "gsap.registerPlugin(DrawSVGPlugin);\n\ngsap.from(\"[data-element-id='{{{{elementId}}}}'] path\", {{\n  drawSVG: \"{}\",\n  duration: {{{{duration}}}},\n  ease: \"power1.inOut\"\n}})",
                    draw
                ),
                "<div class=\"preview-container\">\n  <svg data-element-id=\"preview\" viewBox=\"0 0 100 100\"><path d=\"M10 50 Q50 10 90 50\" /></svg>\n</div>",
            )
            .with_parameters(vec![duration(2.0)])
            .with_plugins(vec![Plugin::DrawSvg])
            .with_difficulty(Difficulty::Intermediate)
            .with_tags(["svg", "stroke"])
            .with_prompts([
                format!("draw stroke {}", label.to_lowercase()),
                "animate svg outline".to_string(),
                "line drawing".to_string(),
            ])
        })
        .collect()
}

pub const STROKE_MODES: [(&str, &str); 3] = [
    ("Forward", "0%"),
    ("Reverse", "100% 100%"),
    ("From Center", "50% 50%"),
];

/// Grid staggers over a list of stagger origins
pub fn grid_staggers(origins: &[&str]) -> Vec<TemplateConfig> {
    origins
        .iter()
        .map(|origin| {
            TemplateConfig::new(
                format!("Grid Stagger {}", title_case(origin)),
                Category::Advanced,
                "stagger",
                format!("Stagger a grid of items outward from the {}", origin),
                format!(
                    "gsap.from(\"[data-element-id='{{{{elementId}}}}'] .item\", {{\n  scale: 0,\n  opacity: 0,\n  duration: {{{{duration}}}},\n  stagger: {{ grid: \"auto\", from: \"{}\", amount: {{{{amount}}}} }},\n  ease: \"{{{{ease}}}}\"\n}})",
                    origin
                ),
                "<div class=\"preview-container\">\n  <div class=\"grid\" data-element-id=\"preview\"></div>\n</div>",
            )
            .with_parameters(vec![
                duration(0.5),
                ParameterSpec::range("amount", 1.0, 0.1, 3.0, 0.1),
                ParameterSpec::select(
                    "ease",
                    "power2.out",
                    vec![
                        SelectOption::new("Power2 Out", "power2.out"),
                        SelectOption::new("Back Out", "back.out(1.7)"),
                    ],
                ),
            ])
            .with_difficulty(Difficulty::Advanced)
            .with_tags(["grid", "stagger"])
            .with_prompts([
                format!("grid stagger from {}", origin),
                "animate a grid of cards".to_string(),
                "ripple through items".to_string(),
            ])
        })
        .collect()
}

pub const GRID_ORIGINS: [&str; 4] = ["start", "center", "edges", "random"];

/// Every generated family for one category, in a fixed order
pub fn configs_for(category: Category) -> Vec<TemplateConfig> {
    match category {
        Category::Core => {
            let mut configs = directional_fades(&Direction::ALL);
            configs.extend(directional_slides(&Direction::ALL));
            configs.extend(scale_entrances());
            configs
        }
        Category::ScrollTrigger => {
            let mut configs = scroll_reveals(&Direction::ALL);
            configs.extend(parallax_layers(&PARALLAX_SPEEDS));
            configs
        }
        Category::Svg => stroke_draws(&STROKE_MODES),
        Category::Physics => springy(&SPRING_EASINGS),
        Category::Text => character_waves(&WAVE_ORIGINS),
        Category::Advanced => grid_staggers(&GRID_ORIGINS),
    }
}

/// Variation specs that swap a template's `ease` placeholder for a fixed curve
pub fn ease_variation_specs(easings: &[Easing]) -> Vec<VariationSpec> {
    easings
        .iter()
        .map(|easing| {
            VariationSpec::new(easing.label)
                .with_code_modification("ease", easing.curve)
                .with_tags([easing.label.to_lowercase()])
                .with_prompts([format!("{} version", easing.label.to_lowercase())])
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateRegistry;
    use std::collections::HashSet;

    #[test]
    fn test_directional_fade_offsets() {
        let configs = directional_fades(&Direction::ALL);
        let names: Vec<&str> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Fade In Up", "Fade In Down", "Fade In Left", "Fade In Right"]
        );

        let defaults: Vec<_> = configs
            .iter()
            .map(|c| c.parameters.as_ref().unwrap()[0].default.clone().unwrap())
            .collect();
        assert_eq!(
            defaults,
            vec![
                serde_json::json!(50.0),
                serde_json::json!(-50.0),
                serde_json::json!(50.0),
                serde_json::json!(-50.0)
            ]
        );
        assert!(configs[2].code.contains("x: {{distance}}"));
        assert_eq!(configs[2].description, "Fade an element in while moving it left");
    }

    #[test]
    fn test_slides_start_on_their_named_edge() {
        let configs = directional_slides(&[Direction::Left, Direction::Right, Direction::Up]);
        let defaults: Vec<_> = configs
            .iter()
            .map(|c| c.parameters.as_ref().unwrap()[0].default.clone().unwrap())
            .collect();
        assert_eq!(
            defaults,
            vec![
                serde_json::json!(-100.0),
                serde_json::json!(100.0),
                serde_json::json!(-100.0)
            ]
        );
        assert_eq!(configs[0].description, "Slide an element in from the left edge");
    }

    #[test]
    fn test_scroll_reveal_travels_in_its_direction() {
        let configs = scroll_reveals(&[Direction::Left, Direction::Right]);
        let offsets: Vec<_> = configs
            .iter()
            .map(|c| c.parameters.as_ref().unwrap()[0].default.clone().unwrap())
            .collect();
        assert_eq!(offsets, vec![serde_json::json!(80.0), serde_json::json!(-80.0)]);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        for category in Category::ALL {
            assert_eq!(configs_for(category), configs_for(category));
        }
        let reversed = [Direction::Right, Direction::Left];
        let names: Vec<String> = directional_slides(&reversed)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Slide In Right", "Slide In Left"]);
    }

    #[test]
    fn test_every_family_config_registers_in_its_category() {
        let mut registry = TemplateRegistry::new();
        for category in Category::ALL {
            let configs = configs_for(category);
            assert!(!configs.is_empty());
            let names: HashSet<&str> = configs.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names.len(), configs.len(), "duplicate names in {category}");

            for config in configs.clone() {
                assert_eq!(config.category, category);
                let name = config.name.clone();
                let template = registry
                    .create_template(config)
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
                assert!(category.id_range().contains(template.id));
            }
        }
    }

    #[test]
    fn test_springy_enumerates_every_combination() {
        let configs = springy(&SPRING_EASINGS);
        assert_eq!(configs.len(), 6);
        assert_eq!(configs[0].name, "Elastic Drop");
        assert_eq!(configs[5].name, "Bounce Pop");
        assert!(configs[4].code.contains("bounce.out"));
    }

    #[test]
    fn test_ease_variation_specs_replace_ease_placeholder() {
        let specs = ease_variation_specs(&SWAP_EASINGS);
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].suffix, "Snappy");
        assert_eq!(
            specs[0].code_modifications.get("ease").map(String::as_str),
            Some("power4.out")
        );
    }
}
