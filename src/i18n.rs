#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub fn text_align(self) -> &'static str {
        match self {
            Self::En => "left",
            Self::Ar => "right",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "العربية",
            Self::Ar => "English",
        }
    }
}

pub const RICH_TEXT_KEY: &str = "hero-description";

pub fn is_rich_text(key: &str) -> bool {
    key == RICH_TEXT_KEY
}

pub fn entries(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ar => AR,
    }
}

pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    entries(lang)
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, text)| *text)
}

pub fn subtitle_phrases(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::En => &["Full Stack Developer", "Flutter Developer"],
        Lang::Ar => &["مطور ويب متكامل", "مطور فلاتر"],
    }
}

const EN: &[(&str, &str)] = &[
    ("nav-home", "Home"),
    ("nav-about", "About"),
    ("nav-skills", "Skills"),
    ("nav-projects", "Projects"),
    ("nav-contact", "Contact"),
    ("hero-greeting", "Hello, I'm"),
    ("hero-name", "Awsam Raafat"),
    ("hero-title", "Full Stack Developer • Flutter Developer"),
    (
        "hero-description",
        "I specialize in creating advanced web applications using cutting-edge technologies<br>Transforming ideas into stunning digital reality",
    ),
    ("hero-projects", "Projects Completed"),
    ("hero-experience", "Years Experience"),
    ("hero-clients", "Happy Clients"),
    ("hero-view-work", "View My Work"),
    ("hero-download-cv", "Download My CV"),
    ("about-title", "About Me"),
    ("about-subtitle", "My passion for development and innovation"),
    ("about-welcome", "Welcome to my digital world"),
    (
        "about-text",
        "I'm a passionate web developer who creates exceptional digital experiences. I started my programming journey 5 years ago, and since then I haven't stopped learning and developing. I specialize in modern web technologies and love transforming complex ideas into clean, elegant code.",
    ),
    ("about-vision", "My Vision"),
    (
        "about-vision-text",
        "I believe that technology should serve humanity, and every project should solve real problems and improve users' lives. My goal is to create fast, secure, and scalable applications.",
    ),
    ("about-tech", "Favorite Technologies"),
    ("skills-title", "Skills"),
    ("skills-subtitle", "Technologies and tools I master"),
    ("projects-title", "Projects"),
    ("projects-subtitle", "My featured projects and achievements"),
    ("projects-all", "All"),
    ("projects-web", "Web Apps"),
    ("projects-mobile", "Mobile Apps"),
    ("projects-ai", "AI/ML"),
    ("contact-title", "Contact Me"),
    ("contact-subtitle", "Let's start your next project together"),
    ("contact-email", "Email"),
    ("contact-phone", "Phone"),
    ("contact-location", "Location"),
    ("contact-copy", "Copy"),
    ("contact-form-title", "Send me a message"),
    ("contact-form-subtitle", "I'll get back to you as soon as possible"),
    ("contact-name", "Name"),
    ("contact-name-placeholder", "Enter your name"),
    ("contact-email-placeholder", "Enter your email"),
    ("contact-subject", "Subject"),
    ("contact-subject-placeholder", "Message subject"),
    ("contact-message", "Message"),
    ("contact-message-placeholder", "Write your message here..."),
    ("contact-send", "Send Message"),
    ("footer-rights", "All rights reserved."),
    ("footer-made", "Made with"),
    ("title-word-first", "Awsam"),
    ("title-word-last", "Raafat"),
    ("terminal-prompt", "awsam@devmaster:~$"),
    ("code-name-string", "'Awsam Raafat'"),
    ("code-hello-string", "'Hello World!'"),
    ("notify-sending", "Sending..."),
    (
        "notify-sent",
        "Message sent successfully! I'll get back to you soon.",
    ),
    ("notify-send-failed", "Failed to send. Please try again."),
    ("notify-unavailable", "Unable to send right now. Try later."),
    ("notify-copied", "Text copied!"),
];

const AR: &[(&str, &str)] = &[
    ("nav-home", "الرئيسية"),
    ("nav-about", "نبذة عني"),
    ("nav-skills", "المهارات"),
    ("nav-projects", "المشاريع"),
    ("nav-contact", "تواصل"),
    ("hero-greeting", "مرحباً، أنا"),
    ("hero-name", "أوسم رأفت"),
    ("hero-title", "مطور ويب متكامل • مطور فلاتر"),
    (
        "hero-description",
        "أخصص في إنشاء تطبيقات ويب متطورة باستخدام أحدث التقنيات<br>أحول الأفكار إلى واقع رقمي مذهل",
    ),
    ("hero-projects", "مشروع مكتمل"),
    ("hero-experience", "سنوات خبرة"),
    ("hero-clients", "عميل راضي"),
    ("hero-view-work", "شاهد أعمالي"),
    ("hero-download-cv", "تحميل السيرة الذاتية"),
    ("about-title", "نبذة عني"),
    ("about-subtitle", "قصة شغفي بالتطوير والإبداع"),
    ("about-welcome", "مرحباً بك في عالمي الرقمي"),
    (
        "about-text",
        "أنا مطور ويب شغوف بإنشاء تجارب رقمية استثنائية. بدأت رحلتي في عالم البرمجة منذ 5 سنوات، ومنذ ذلك الحين لم أتوقف عن التعلم والتطوير. أخصص في تقنيات الويب الحديثة وأحب تحويل الأفكار المعقدة إلى كود بسيط وأنيق.",
    ),
    ("about-vision", "رؤيتي"),
    (
        "about-vision-text",
        "أؤمن بأن التكنولوجيا يجب أن تكون في خدمة الإنسان، وأن كل مشروع يجب أن يحل مشكلة حقيقية ويحسن من حياة المستخدمين. هدفي هو إنشاء تطبيقات سريعة، آمنة، وقابلة للتطوير.",
    ),
    ("about-tech", "التقنيات المفضلة"),
    ("skills-title", "المهارات"),
    ("skills-subtitle", "التقنيات والأدوات التي أتقنها"),
    ("projects-title", "المشاريع"),
    ("projects-subtitle", "مشاريعي المميزة والإنجازات"),
    ("projects-all", "الكل"),
    ("projects-web", "مواقع ويب"),
    ("projects-mobile", "تطبيقات موبايل"),
    ("projects-ai", "ذكاء اصطناعي"),
    ("contact-title", "تواصل معي"),
    ("contact-subtitle", "دعنا نبدأ مشروعك القادم معاً"),
    ("contact-email", "البريد الإلكتروني"),
    ("contact-phone", "رقم الهاتف"),
    ("contact-location", "الموقع"),
    ("contact-copy", "نسخ"),
    ("contact-form-title", "أرسل لي رسالة"),
    ("contact-form-subtitle", "سأرد عليك في أقرب وقت ممكن"),
    ("contact-name", "الاسم"),
    ("contact-name-placeholder", "أدخل اسمك"),
    ("contact-email-placeholder", "أدخل بريدك الإلكتروني"),
    ("contact-subject", "الموضوع"),
    ("contact-subject-placeholder", "موضوع الرسالة"),
    ("contact-message", "الرسالة"),
    ("contact-message-placeholder", "اكتب رسالتك هنا..."),
    ("contact-send", "إرسال الرسالة"),
    ("footer-rights", "جميع الحقوق محفوظة."),
    ("footer-made", "صُنع بـ"),
    ("title-word-first", "أوسم"),
    ("title-word-last", "رأفت"),
    ("terminal-prompt", "أوسم@devmaster:~$"),
    ("code-name-string", "'أوسم رأفت'"),
    ("code-hello-string", "'مرحباً بالعالم!'"),
    ("notify-sending", "جاري الإرسال..."),
    ("notify-sent", "تم إرسال رسالتك بنجاح! سأرد عليك قريباً."),
    ("notify-send-failed", "فشل إرسال الرسالة. حاول مرة أخرى."),
    ("notify-unavailable", "تعذر إرسال الرسالة. جرب لاحقاً."),
    ("notify-copied", "تم نسخ النص!"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dictionaries_cover_the_same_keys_in_the_same_order() {
        let english: Vec<&str> = entries(Lang::En).iter().map(|(key, _)| *key).collect();
        let arabic: Vec<&str> = entries(Lang::Ar).iter().map(|(key, _)| *key).collect();

        assert_eq!(english, arabic);
    }

    #[test]
    fn no_dictionary_value_is_empty() {
        for lang in [Lang::En, Lang::Ar] {
            for (key, text) in entries(lang) {
                assert!(!text.is_empty(), "empty value for {key}");
            }
        }
    }

    #[test]
    fn toggling_twice_round_trips_every_string() {
        let round_tripped = Lang::En.toggled().toggled();
        assert_eq!(round_tripped, Lang::En);

        for (key, text) in entries(Lang::En) {
            assert_eq!(lookup(round_tripped, key), Some(*text));
        }
    }

    #[test]
    fn lookup_finds_redesigned_keys_that_were_hard_coded() {
        assert_eq!(lookup(Lang::En, "terminal-prompt"), Some("awsam@devmaster:~$"));
        assert_eq!(lookup(Lang::Ar, "title-word-first"), Some("أوسم"));
        assert_eq!(lookup(Lang::En, "missing-key"), None);
    }

    #[test]
    fn only_the_hero_description_is_rich_text() {
        assert!(is_rich_text("hero-description"));
        assert!(!is_rich_text("hero-title"));

        let rich_in_en = entries(Lang::En)
            .iter()
            .filter(|(key, _)| is_rich_text(key))
            .count();
        assert_eq!(rich_in_en, 1);
    }

    #[test]
    fn direction_and_labels_follow_the_language() {
        assert_eq!(Lang::En.direction(), "ltr");
        assert_eq!(Lang::Ar.direction(), "rtl");
        assert_eq!(Lang::En.toggle_label(), "العربية");
        assert_eq!(Lang::Ar.toggle_label(), "English");
        assert_eq!(Lang::from_str("ar"), Some(Lang::Ar));
        assert_eq!(Lang::from_str("fr"), None);
    }

    #[test]
    fn each_language_rotates_two_subtitle_phrases() {
        assert_eq!(subtitle_phrases(Lang::En).len(), 2);
        assert_eq!(subtitle_phrases(Lang::Ar).len(), 2);
    }
}
