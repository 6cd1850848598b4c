//! Built-in authored presets shipped with the catalog

use crate::template::{
    Category, Difficulty, ParameterSpec, Plugin, SelectOption, TemplateConfig,
};

use super::PresetSource;

/// The presets compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPresets;

impl PresetSource for BuiltinPresets {
    fn name(&self) -> &str {
        "builtin"
    }

    fn configs(&self, category: Category) -> Vec<TemplateConfig> {
        match category {
            Category::Core => core(),
            Category::ScrollTrigger => scroll_trigger(),
            Category::Svg => svg(),
            Category::Physics => physics(),
            Category::Text => text(),
            Category::Advanced => advanced(),
        }
    }
}

fn preview(heading: &str) -> String {
    format!(
        "<div class=\"preview-container\">\n  <div class=\"preview-element\" data-element-id=\"preview\">\n    <h2>{}</h2>\n  </div>\n</div>",
        heading
    )
}

fn duration(default: f64, min: f64, max: f64) -> ParameterSpec {
    ParameterSpec::range("duration", default, min, max, 0.1)
        .with_description("Animation duration in seconds")
}

fn ease(default: &str, options: &[(&str, &str)]) -> ParameterSpec {
    ParameterSpec::select(
        "ease",
        default,
        options
            .iter()
            .map(|(label, value)| SelectOption::new(*label, *value))
            .collect(),
    )
    .with_description("Easing function")
}

fn core() -> Vec<TemplateConfig> {
    vec![
        TemplateConfig::new(
            "Fade In",
            Category::Core,
            "fade",
            "Smoothly fade in an element with customizable parameters",
            r#"gsap.from("[data-element-id='{{elementId}}']", {
  opacity: 0,
  duration: {{duration}},
  ease: "{{ease}}",
  delay: {{delay}},
  y: {{yOffset}}
})"#,
            preview("Fade In Effect"),
        )
        .with_parameters(vec![
            duration(1.0, 0.1, 5.0),
            ease(
                "power2.out",
                &[
                    ("Linear", "none"),
                    ("Power2 Out", "power2.out"),
                    ("Power3 InOut", "power3.inOut"),
                    ("Back", "back.out"),
                ],
            ),
            ParameterSpec::number("delay", 0.0)
                .with_bounds(0.0, 10.0)
                .with_description("Delay before animation starts"),
            ParameterSpec::number("yOffset", 0.0)
                .with_bounds(-200.0, 200.0)
                .with_description("Vertical offset for slide effect"),
        ])
        .with_prompts([
            "fade in element",
            "make it appear smoothly",
            "gentle appearance animation",
            "smooth entrance effect",
            "reveal with fade",
        ])
        .with_use_cases(["Hero sections", "Content reveals", "Modal entrances"]),
        TemplateConfig::new(
            "Fade Out",
            Category::Core,
            "fade",
            "Smoothly fade out an element",
            r#"gsap.to("[data-element-id='{{elementId}}']", {
  opacity: 0,
  duration: {{duration}},
  ease: "{{ease}}",
  delay: {{delay}}
})"#,
            preview("Fade Out Effect"),
        )
        .with_parameters(vec![
            duration(1.0, 0.1, 5.0),
            ease(
                "power2.in",
                &[("Linear", "none"), ("Power2 In", "power2.in"), ("Expo In", "expo.in")],
            ),
            ParameterSpec::number("delay", 0.0).with_bounds(0.0, 10.0),
        ])
        .with_prompts(["fade out element", "make it disappear", "vanish smoothly"])
        .with_use_cases(["Dismissing notifications", "Closing modals"]),
        TemplateConfig::new(
            "Slide In",
            Category::Core,
            "slide",
            "Slide an element in from an offset position",
            r#"gsap.from("[data-element-id='{{elementId}}']", {
  x: {{xOffset}},
  opacity: 0,
  duration: {{duration}},
  ease: "{{ease}}"
})"#,
            preview("Slide In"),
        )
        .with_parameters(vec![
            ParameterSpec::number("xOffset", -100.0).with_bounds(-500.0, 500.0),
            duration(0.8, 0.1, 3.0),
            ease(
                "power3.out",
                &[("Power3 Out", "power3.out"), ("Back Out", "back.out(1.7)")],
            ),
        ])
        .with_use_cases(["Navigation drawers", "Card entrances"]),
        TemplateConfig::new(
            "Scale Up",
            Category::Core,
            "scale",
            "Grow an element from a smaller scale",
            r#"gsap.from("[data-element-id='{{elementId}}']", {
  scale: {{startScale}},
  opacity: 0,
  duration: {{duration}},
  ease: "{{ease}}"
})"#,
            preview("Scale Up"),
        )
        .with_parameters(vec![
            ParameterSpec::range("startScale", 0.5, 0.0, 2.0, 0.1),
            duration(0.6, 0.1, 3.0),
            ease(
                "back.out(1.7)",
                &[("Back Out", "back.out(1.7)"), ("Power2 Out", "power2.out")],
            ),
        ]),
        TemplateConfig::new(
            "Rotate In",
            Category::Core,
            "rotate",
            "Rotate an element into place",
            r#"gsap.from("[data-element-id='{{elementId}}']", {
  rotation: {{rotation}},
  opacity: 0,
  duration: {{duration}},
  transformOrigin: "{{origin}}"
})"#,
            preview("Rotate In"),
        )
        .with_parameters(vec![
            ParameterSpec::number("rotation", -180.0).with_bounds(-360.0, 360.0),
            duration(1.0, 0.1, 3.0),
            ParameterSpec::select(
                "origin",
                "center",
                vec![
                    SelectOption::new("Center", "center"),
                    SelectOption::new("Top Left", "top left"),
                ],
            ),
        ])
        .with_difficulty(Difficulty::Intermediate),
    ]
}

fn scroll_trigger() -> Vec<TemplateConfig> {
    vec![
        TemplateConfig::new(
            "Basic Parallax",
            Category::ScrollTrigger,
            "parallax",
            "Simple parallax scrolling effect",
            r#"gsap.registerPlugin(ScrollTrigger);

gsap.to("[data-element-id='{{elementId}}']", {
  yPercent: {{yPercent}},
  ease: "none",
  scrollTrigger: {
    trigger: "[data-element-id='{{elementId}}']",
    start: "top bottom",
    end: "bottom top",
    scrub: {{scrubValue}}
  }
})"#,
            preview("Parallax Element"),
        )
        .with_parameters(vec![
            ParameterSpec::range("yPercent", -50.0, -100.0, 100.0, 5.0)
                .with_description("Vertical movement percentage"),
            ParameterSpec::range("scrubValue", 1.0, 0.1, 5.0, 0.1)
                .with_description("Smoothness of parallax"),
        ])
        .with_plugins(vec![Plugin::ScrollTrigger])
        .with_prompts([
            "parallax scroll",
            "background parallax",
            "depth scrolling",
            "different scroll speed",
        ])
        .with_use_cases(["Hero backgrounds", "Landing pages"]),
        TemplateConfig::new(
            "Fade In On Scroll",
            Category::ScrollTrigger,
            "reveal",
            "Fade elements in as they enter the viewport",
            r#"gsap.registerPlugin(ScrollTrigger);

gsap.from("[data-element-id='{{elementId}}']", {
  opacity: 0,
  y: {{yOffset}},
  duration: {{duration}},
  scrollTrigger: {
    trigger: "[data-element-id='{{elementId}}']",
    start: "{{startPosition}}",
    toggleActions: "play none none reverse",
    once: {{once}}
  }
})"#,
            preview("Scroll To Reveal"),
        )
        .with_parameters(vec![
            ParameterSpec::number("yOffset", 50.0).with_bounds(-200.0, 200.0),
            duration(1.0, 0.1, 3.0),
            ParameterSpec::text("startPosition", "top 80%")
                .with_description("ScrollTrigger start position"),
            ParameterSpec::boolean("once", false).with_description("Only animate once"),
        ])
        .with_plugins(vec![Plugin::ScrollTrigger])
        .with_prompts(["fade in on scroll", "reveal when visible", "scroll reveal"]),
        TemplateConfig::new(
            "Pin Section",
            Category::ScrollTrigger,
            "pin",
            "Pin a section while the page scrolls past",
            r#"gsap.registerPlugin(ScrollTrigger);

ScrollTrigger.create({
  trigger: "[data-element-id='{{elementId}}']",
  start: "top top",
  end: "+={{pinDuration}}",
  pin: true,
  pinSpacing: {{pinSpacing}}
})"#,
            preview("Pinned Section"),
        )
        .with_parameters(vec![
            ParameterSpec::number("pinDuration", 500.0).with_bounds(100.0, 3000.0),
            ParameterSpec::boolean("pinSpacing", true),
        ])
        .with_plugins(vec![Plugin::ScrollTrigger])
        .with_difficulty(Difficulty::Intermediate)
        .with_prompts(["pin section", "sticky section", "pin while scrolling"]),
    ]
}

fn svg() -> Vec<TemplateConfig> {
    vec![TemplateConfig::new(
        "Draw SVG Path",
        Category::Svg,
        "draw",
        "Reveal an SVG stroke as if it were being drawn",
        r#"gsap.registerPlugin(DrawSVGPlugin);

gsap.from("[data-element-id='{{elementId}}'] path", {
  drawSVG: "{{drawFrom}}",
  duration: {{duration}},
  stagger: {{stagger}},
  ease: "{{ease}}"
})"#,
        "<div class=\"preview-container\">\n  <svg data-element-id=\"preview\" viewBox=\"0 0 100 100\"><path d=\"M10 50 Q50 10 90 50\" /></svg>\n</div>",
    )
    .with_parameters(vec![
        ParameterSpec::text("drawFrom", "0%"),
        duration(2.0, 0.2, 6.0),
        ParameterSpec::range("stagger", 0.1, 0.0, 1.0, 0.05),
        ease("power1.inOut", &[("Power1 InOut", "power1.inOut"), ("Linear", "none")]),
    ])
    .with_plugins(vec![Plugin::DrawSvg])
    .with_difficulty(Difficulty::Intermediate)
    .with_prompts(["draw svg line", "stroke drawing animation", "handwriting effect"])]
}

fn physics() -> Vec<TemplateConfig> {
    vec![TemplateConfig::new(
        "Magnetic Hover",
        Category::Physics,
        "hover",
        "Pull an element toward the pointer while hovering",
        r#"const el = document.querySelector("[data-element-id='{{elementId}}']");

el.addEventListener("mousemove", (e) => {
  const r = el.getBoundingClientRect();
  gsap.to(el, {
    x: (e.clientX - r.left - r.width / 2) * {{strength}},
    y: (e.clientY - r.top - r.height / 2) * {{strength}},
    duration: {{duration}}
  });
});
el.addEventListener("mouseleave", () => gsap.to(el, { x: 0, y: 0, ease: "elastic.out(1, 0.3)" }));"#,
        preview("Hover Me"),
    )
    .with_parameters(vec![
        ParameterSpec::range("strength", 0.3, 0.05, 1.0, 0.05),
        duration(0.4, 0.1, 2.0),
    ])
    .with_difficulty(Difficulty::Intermediate)
    .with_prompts(["magnetic button", "follow the cursor", "sticky hover effect"])]
}

fn text() -> Vec<TemplateConfig> {
    vec![TemplateConfig::new(
        "Typewriter",
        Category::Text,
        "typing",
        "Type text out one character at a time",
        r#"gsap.registerPlugin(TextPlugin);

gsap.to("[data-element-id='{{elementId}}']", {
  text: "{{content}}",
  duration: {{duration}},
  ease: "none"
})"#,
        "<div class=\"preview-container\">\n  <p data-element-id=\"preview\"></p>\n</div>",
    )
    .with_parameters(vec![
        ParameterSpec::text("content", "Hello, world"),
        duration(2.0, 0.5, 10.0),
        ParameterSpec::color("cursorColor", "#333333"),
    ])
    .with_plugins(vec![Plugin::TextPlugin])
    .with_prompts(["typewriter effect", "typing text", "type out letters"])]
}

fn advanced() -> Vec<TemplateConfig> {
    vec![TemplateConfig::new(
        "Flip Layout",
        Category::Advanced,
        "layout",
        "Animate between two layout states",
        r#"gsap.registerPlugin(Flip);

const state = Flip.getState("[data-element-id='{{elementId}}'] .item");
document.querySelector("[data-element-id='{{elementId}}']").classList.toggle("{{toggleClass}}");
Flip.from(state, { duration: {{duration}}, ease: "{{ease}}", absolute: true });"#,
        preview("Flip"),
    )
    .with_parameters(vec![
        ParameterSpec::text("toggleClass", "grid"),
        duration(0.7, 0.1, 3.0),
        ease("power1.inOut", &[("Power1 InOut", "power1.inOut"), ("Expo InOut", "expo.inOut")]),
    ])
    .with_plugins(vec![Plugin::Flip])
    .with_difficulty(Difficulty::Advanced)
    .with_prompts(["flip animation", "animate layout change", "smooth grid reflow"])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateRegistry;

    #[test]
    fn test_every_builtin_preset_registers() {
        let mut registry = TemplateRegistry::new();
        for category in Category::ALL {
            for config in BuiltinPresets.configs(category) {
                assert_eq!(config.category, category);
                let name = config.name.clone();
                registry
                    .create_template(config)
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
            }
        }
        assert!(registry.len() >= Category::ALL.len());
    }

    #[test]
    fn test_every_category_has_presets() {
        for category in Category::ALL {
            assert!(!BuiltinPresets.configs(category).is_empty(), "{category}");
        }
    }
}
