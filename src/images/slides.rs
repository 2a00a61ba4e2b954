/// Tone of the upper part of the image, where the slide text sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl Background {
    pub fn text_color(self) -> TextColor {
        match self {
            Background::Dark => TextColor::White,
            Background::Light => TextColor::Black,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub number: u32,
    pub name: &'static str,
    pub background: Background,
    pub prompt: &'static str,
}

impl Slide {
    pub fn file_name(&self) -> String {
        format!("slide_{}_{}.png", self.number, self.name)
    }

    pub fn full_prompt(&self) -> String {
        format!(
            "{}. Professional photography, no text or graphics.",
            self.prompt
        )
    }
}

pub static SLIDES: [Slide; 5] = [
    Slide {
        number: 1,
        name: "foundation",
        background: Background::Light,
        prompt: "Overhead aerial photograph of a massive futuristic concrete spaceport \
                 under construction, clean modernist architecture, white and light gray \
                 concrete structures, bright sky at top of frame, the upper third naturally \
                 light and minimal for clean composition",
    },
    Slide {
        number: 2,
        name: "ladder_to_moon",
        background: Background::Dark,
        prompt: "Photograph of a wooden ladder reaching toward a full moon in a dark \
                 evening sky, ladder in lower half of frame, upper portion is smooth \
                 dark blue night sky gradually fading darker toward top",
    },
    Slide {
        number: 3,
        name: "integration",
        background: Background::Light,
        prompt: "Photograph of hands manipulating laboratory glassware with AR glasses, \
                 shot with shallow depth of field, the background at top naturally blurred \
                 into soft light tones",
    },
    Slide {
        number: 4,
        name: "two_tracks",
        background: Background::Light,
        prompt: "Aerial photograph of parallel railway tracks extending toward distant \
                 mountains at golden hour, tracks in lower two-thirds, warm golden sky \
                 gradually lightening toward top of frame",
    },
    Slide {
        number: 5,
        name: "unlocking",
        background: Background::Light,
        prompt: "Photograph of an ornate brass key in an antique lock, tight focus on \
                 the key mechanism in lower portion, background naturally blurred to \
                 soft warm tones toward top",
    },
];

/// All slides when `requested` is empty, otherwise those whose number was
/// asked for, in table order.
pub fn select_slides(requested: &[u32]) -> Vec<&'static Slide> {
    if requested.is_empty() {
        return SLIDES.iter().collect();
    }
    for n in requested {
        if !SLIDES.iter().any(|s| s.number == *n) {
            log::warn!("No slide numbered {n}, skipping");
        }
    }
    SLIDES
        .iter()
        .filter(|s| requested.contains(&s.number))
        .collect()
}
