// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for atlas-site.
//!
//! Embeds all user-facing strings for supported languages as a compile-time
//! static table. Lookup is a linear scan over the key list per language, which
//! is fine for the hundred-odd keys we have.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add translations to FR, FA, AR (missing keys fall back to English)

use super::iso639;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
    Fa,
    Ar,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::Fa => "fa",
            Lang::Ar => "ar",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Accepts region-qualified tags (`fa-IR`, `ar_AE`) and ignores case.
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            "fa" => Some(Lang::Fa),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// All supported languages, in language-switcher order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Fr, Lang::Fa, Lang::Ar]
    }

    pub fn direction(&self) -> Direction {
        Direction::for_code(self.code())
    }

    pub fn native_name(&self) -> &'static str {
        iso639::native_name(self.code()).unwrap_or(self.code())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Pure function of the language code: flagged right-to-left codes map
    /// to [`Direction::Rtl`], everything else to [`Direction::Ltr`].
    pub fn for_code(code: &str) -> Direction {
        if iso639::is_rtl(code) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Value for an HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the built-in catalog.
///
/// Falls back to English if the key is not found in the requested language.
/// If the key is missing in English too, returns the key itself so missing
/// translations stay visible on the page.
///
/// # Examples
///
/// ```
/// use atlas_site::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "nav.home"), "Home");
/// assert_eq!(t(Lang::Fr, "nav.home"), "Accueil");
/// assert_eq!(t(Lang::Fa, "no.such.key"), "no.such.key");
/// ```
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup_builtin(lang, key).unwrap_or(key)
}

/// [`t`] followed by `{{placeholder}}` substitution.
pub fn t_with(lang: Lang, key: &str, vars: &[(&str, &dyn fmt::Display)]) -> String {
    interpolate(t(lang, key), vars)
}

/// Requested language, then English. `None` when neither has the key.
pub(crate) fn lookup_builtin(lang: Lang, key: &str) -> Option<&'static str> {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return Some(value);
    }
    if lang != Lang::En {
        return lookup(EN, key);
    }
    None
}

/// Replace every `{{name}}` (inner whitespace allowed) with the matching
/// value. Placeholders without a value are left as written.
pub fn interpolate(template: &str, vars: &[(&str, &dyn fmt::Display)]) -> String {
    if vars.is_empty() || !template.contains("{{") {
        return template.to_string();
    }
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match vars.iter().find(|(var, _)| *var == name) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Requested language only, no fallback.
pub(crate) fn lookup_native(lang: Lang, key: &str) -> Option<&'static str> {
    lookup(catalog_for(lang), key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Fr => FR,
        Lang::Fa => FA,
        Lang::Ar => AR,
    }
}

/// Every key of the source (English) catalog.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|&(k, _)| k)
}

// ─── English (source language, every key defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Chrome
    ("site.name", "Atlas Group"),
    ("site.tagline", "Engineering a sustainable future"),
    ("site.language", "Language"),
    ("site.theme.light", "Light mode"),
    ("site.theme.dark", "Dark mode"),
    ("site.footer.rights", "© {{year}} Atlas Group. All rights reserved."),
    ("site.loading", "Loading…"),
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.technologies", "Core Technologies"),
    ("nav.projects", "Projects"),
    ("nav.innovation", "Innovation Hub"),
    ("nav.sustainability", "Sustainability"),
    ("nav.careers", "Careers"),
    ("nav.investors", "Investors"),
    ("nav.leadership", "Leadership"),
    ("nav.partners", "Partners"),
    ("nav.news", "News"),
    ("nav.contact", "Contact"),
    ("nav.legal", "Legal Notice"),
    ("nav.privacy", "Privacy Policy"),
    ("nav.search_results", "Search Results"),
    ("nav.coming_soon", "Coming Soon"),
    // Home
    ("home.hero.title", "Building the infrastructure of tomorrow"),
    ("home.hero.subtitle", "Energy, water, industry and mobility across {{countries}} countries."),
    ("home.cta", "Explore our projects"),
    ("home.featured_projects", "Featured projects"),
    ("home.latest_news", "Latest news"),
    // About
    ("about.title", "Who we are"),
    ("about.body", "Atlas Group is a diversified engineering and investment group founded in 1978."),
    ("about.mission", "Our mission is to deliver infrastructure that lasts for generations."),
    ("about.values", "Integrity, safety and long-term partnership guide every decision."),
    // Technologies
    ("tech.title", "Our core technologies"),
    ("tech.intro", "Proprietary platforms developed by our engineering centres."),
    // Projects
    ("projects.title", "Flagship projects"),
    ("projects.intro", "A selection of projects delivered by Atlas Group companies."),
    ("projects.sector", "Sector: {{sector}}"),
    // Innovation
    ("innovation.title", "Innovation Hub"),
    ("innovation.body", "Our campus connects researchers, engineers and start-ups."),
    // Sustainability
    ("sustainability.title", "Sustainability"),
    ("sustainability.body", "We have committed to net-zero operations by 2040."),
    // Careers
    ("careers.title", "Careers"),
    ("careers.body", "Join more than {{employees}} colleagues building lasting infrastructure."),
    // Investors
    ("investors.title", "Investor relations"),
    ("investors.body", "Financial reports, presentations and the shareholder calendar."),
    // Leadership
    ("leadership.title", "Leadership"),
    ("leadership.body", "Our executive board and supervisory council."),
    // Partners
    ("partners.title", "Partners"),
    ("partners.body", "Utilities, universities and technology partners we work with."),
    // News
    ("news.title", "Newsroom"),
    ("news.intro", "Announcements and stories from across the group."),
    ("news.read_more", "Read more"),
    ("news.back", "Back to all news"),
    ("news.published", "Published {{date}}"),
    // Contact
    ("contact.title", "Contact us"),
    ("contact.intro", "Send us a message and our team will reply within two working days."),
    ("contact.name", "Full name"),
    ("contact.email", "Email address"),
    ("contact.company", "Company"),
    ("contact.message", "Message"),
    ("contact.submit", "Send message"),
    ("contact.sending", "Sending…"),
    ("contact.success", "Thank you, {{name}}. Your reference number is {{reference}}."),
    ("contact.failure", "Your message could not be sent. Please try again later."),
    ("contact.error.required", "This field is required."),
    ("contact.error.email", "Please enter a valid email address."),
    // Legal
    ("legal.title", "Legal notice"),
    ("legal.body", "Atlas Group Holding, registered office and company register details."),
    ("privacy.title", "Privacy policy"),
    ("privacy.body", "How we collect, use and protect personal data."),
    // Search
    ("search.placeholder", "Search the site"),
    ("search.results_for", "Results for \"{{query}}\""),
    ("search.count", "{{count}} results"),
    ("search.no_results", "No results found. Try a different search term."),
    ("search.kind.technology", "Technology"),
    ("search.kind.project", "Project"),
    ("search.kind.news", "News"),
    // Coming soon
    ("coming_soon.body", "{{title}} is coming soon. Please check back later."),
    // Widgets
    ("widget.summary.title", "Summary"),
    ("widget.summary.fallback", "Summary unavailable, showing the article excerpt."),
    ("widget.highlights.title", "Key highlights"),
    ("widget.highlights.error", "Highlights could not be generated right now."),
    ("widget.highlights.refresh", "Refresh"),
    // Map
    ("map.title", "Our locations"),
    ("map.error", "The map could not be loaded."),
    ("map.cluster", "{{count}} locations"),
    ("map.category.headquarters", "Headquarters"),
    ("map.category.office", "Office"),
    ("map.category.project", "Project site"),
    ("map.category.research", "Research"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("site.name", "Groupe Atlas"),
    ("site.tagline", "Construire un avenir durable"),
    ("site.language", "Langue"),
    ("site.theme.light", "Mode clair"),
    ("site.theme.dark", "Mode sombre"),
    ("site.footer.rights", "© {{year}} Groupe Atlas. Tous droits réservés."),
    ("site.loading", "Chargement…"),
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.technologies", "Technologies clés"),
    ("nav.projects", "Projets"),
    ("nav.innovation", "Pôle d'innovation"),
    ("nav.sustainability", "Développement durable"),
    ("nav.careers", "Carrières"),
    ("nav.investors", "Investisseurs"),
    ("nav.leadership", "Direction"),
    ("nav.partners", "Partenaires"),
    ("nav.news", "Actualités"),
    ("nav.contact", "Contact"),
    ("nav.legal", "Mentions légales"),
    ("nav.privacy", "Politique de confidentialité"),
    ("nav.search_results", "Résultats de recherche"),
    ("nav.coming_soon", "Bientôt disponible"),
    ("home.hero.title", "Bâtir les infrastructures de demain"),
    ("home.hero.subtitle", "Énergie, eau, industrie et mobilité dans {{countries}} pays."),
    ("home.cta", "Découvrir nos projets"),
    ("home.featured_projects", "Projets phares"),
    ("home.latest_news", "Dernières actualités"),
    ("about.title", "Qui sommes-nous"),
    ("about.body", "Le Groupe Atlas est un groupe diversifié d'ingénierie et d'investissement fondé en 1978."),
    ("about.mission", "Notre mission est de livrer des infrastructures qui durent des générations."),
    ("about.values", "L'intégrité, la sécurité et le partenariat à long terme guident chaque décision."),
    ("tech.title", "Nos technologies clés"),
    ("tech.intro", "Des plateformes propriétaires développées par nos centres d'ingénierie."),
    ("projects.title", "Projets phares"),
    ("projects.intro", "Une sélection de projets réalisés par les sociétés du Groupe Atlas."),
    ("projects.sector", "Secteur : {{sector}}"),
    ("innovation.title", "Pôle d'innovation"),
    ("innovation.body", "Notre campus réunit chercheurs, ingénieurs et start-up."),
    ("sustainability.title", "Développement durable"),
    ("sustainability.body", "Nous nous engageons à atteindre la neutralité carbone d'ici 2040."),
    ("careers.title", "Carrières"),
    ("careers.body", "Rejoignez plus de {{employees}} collègues qui bâtissent des infrastructures durables."),
    ("investors.title", "Relations investisseurs"),
    ("investors.body", "Rapports financiers, présentations et calendrier des actionnaires."),
    ("leadership.title", "Direction"),
    ("leadership.body", "Notre comité exécutif et notre conseil de surveillance."),
    ("partners.title", "Partenaires"),
    ("partners.body", "Les énergéticiens, universités et partenaires technologiques avec qui nous travaillons."),
    ("news.title", "Salle de presse"),
    ("news.intro", "Annonces et récits de l'ensemble du groupe."),
    ("news.read_more", "Lire la suite"),
    ("news.back", "Retour aux actualités"),
    ("news.published", "Publié le {{date}}"),
    ("contact.title", "Nous contacter"),
    ("contact.intro", "Envoyez-nous un message, notre équipe répond sous deux jours ouvrés."),
    ("contact.name", "Nom complet"),
    ("contact.email", "Adresse e-mail"),
    ("contact.company", "Société"),
    ("contact.message", "Message"),
    ("contact.submit", "Envoyer"),
    ("contact.sending", "Envoi en cours…"),
    ("contact.success", "Merci, {{name}}. Votre numéro de référence est {{reference}}."),
    ("contact.failure", "Votre message n'a pas pu être envoyé. Veuillez réessayer plus tard."),
    ("contact.error.required", "Ce champ est obligatoire."),
    ("contact.error.email", "Veuillez saisir une adresse e-mail valide."),
    ("legal.title", "Mentions légales"),
    ("legal.body", "Atlas Group Holding, siège social et informations d'immatriculation."),
    ("privacy.title", "Politique de confidentialité"),
    ("privacy.body", "Comment nous collectons, utilisons et protégeons les données personnelles."),
    ("search.placeholder", "Rechercher sur le site"),
    ("search.results_for", "Résultats pour « {{query}} »"),
    ("search.count", "{{count}} résultats"),
    ("search.no_results", "Aucun résultat. Essayez un autre terme de recherche."),
    ("search.kind.technology", "Technologie"),
    ("search.kind.project", "Projet"),
    ("search.kind.news", "Actualité"),
    ("coming_soon.body", "{{title}} sera bientôt disponible. Revenez plus tard."),
    ("widget.summary.title", "Résumé"),
    ("widget.summary.fallback", "Résumé indisponible, affichage de l'extrait de l'article."),
    ("widget.highlights.title", "Points clés"),
    ("widget.highlights.error", "Les points clés ne peuvent pas être générés pour le moment."),
    ("widget.highlights.refresh", "Actualiser"),
    ("map.title", "Nos implantations"),
    ("map.error", "La carte n'a pas pu être chargée."),
    ("map.cluster", "{{count}} sites"),
    ("map.category.headquarters", "Siège"),
    ("map.category.office", "Bureau"),
    ("map.category.project", "Site de projet"),
    ("map.category.research", "Recherche"),
];

// ─── Persian (right-to-left) ────────────────────────────────────────

const FA: &[(&str, &str)] = &[
    ("site.name", "گروه اطلس"),
    ("site.tagline", "مهندسی آینده‌ای پایدار"),
    ("site.language", "زبان"),
    ("site.theme.light", "حالت روشن"),
    ("site.theme.dark", "حالت تیره"),
    ("site.footer.rights", "© {{year}} گروه اطلس. تمامی حقوق محفوظ است."),
    ("site.loading", "در حال بارگذاری…"),
    ("nav.home", "خانه"),
    ("nav.about", "درباره ما"),
    ("nav.technologies", "فناوری‌های کلیدی"),
    ("nav.projects", "پروژه‌ها"),
    ("nav.innovation", "مرکز نوآوری"),
    ("nav.sustainability", "پایداری"),
    ("nav.careers", "فرصت‌های شغلی"),
    ("nav.investors", "سرمایه‌گذاران"),
    ("nav.leadership", "مدیریت"),
    ("nav.partners", "شرکا"),
    ("nav.news", "اخبار"),
    ("nav.contact", "تماس با ما"),
    ("nav.legal", "اطلاعات حقوقی"),
    ("nav.privacy", "حریم خصوصی"),
    ("nav.search_results", "نتایج جستجو"),
    ("nav.coming_soon", "به‌زودی"),
    ("home.hero.title", "ساختن زیرساخت‌های فردا"),
    ("home.hero.subtitle", "انرژی، آب، صنعت و حمل‌ونقل در {{countries}} کشور."),
    ("home.cta", "پروژه‌های ما را ببینید"),
    ("home.featured_projects", "پروژه‌های برگزیده"),
    ("home.latest_news", "آخرین اخبار"),
    ("about.title", "ما که هستیم"),
    ("about.body", "گروه اطلس یک گروه متنوع مهندسی و سرمایه‌گذاری است که در سال ۱۹۷۸ تأسیس شد."),
    ("about.mission", "مأموریت ما ساخت زیرساخت‌هایی است که برای نسل‌ها دوام بیاورند."),
    ("about.values", "صداقت، ایمنی و همکاری بلندمدت راهنمای همه تصمیم‌های ماست."),
    ("tech.title", "فناوری‌های کلیدی ما"),
    ("tech.intro", "پلتفرم‌های اختصاصی توسعه‌یافته در مراکز مهندسی ما."),
    ("projects.title", "پروژه‌های شاخص"),
    ("projects.intro", "گزیده‌ای از پروژه‌های اجراشده توسط شرکت‌های گروه اطلس."),
    ("projects.sector", "بخش: {{sector}}"),
    ("innovation.title", "مرکز نوآوری"),
    ("innovation.body", "پردیس ما پژوهشگران، مهندسان و استارتاپ‌ها را به هم پیوند می‌دهد."),
    ("sustainability.title", "پایداری"),
    ("sustainability.body", "ما متعهد شده‌ایم تا سال ۲۰۴۰ به عملیات بدون کربن برسیم."),
    ("careers.title", "فرصت‌های شغلی"),
    ("careers.body", "به بیش از {{employees}} همکار بپیوندید که زیرساخت‌های ماندگار می‌سازند."),
    ("investors.title", "روابط سرمایه‌گذاران"),
    ("investors.body", "گزارش‌های مالی، ارائه‌ها و تقویم سهامداران."),
    ("leadership.title", "مدیریت"),
    ("leadership.body", "هیئت‌مدیره اجرایی و شورای نظارت ما."),
    ("partners.title", "شرکا"),
    ("partners.body", "شرکت‌های خدماتی، دانشگاه‌ها و شرکای فناوری که با آنها کار می‌کنیم."),
    ("news.title", "اتاق خبر"),
    ("news.intro", "اطلاعیه‌ها و گزارش‌هایی از سراسر گروه."),
    ("news.read_more", "ادامه مطلب"),
    ("news.back", "بازگشت به همه اخبار"),
    ("news.published", "منتشرشده در {{date}}"),
    ("contact.title", "تماس با ما"),
    ("contact.intro", "برای ما پیام بفرستید؛ تیم ما ظرف دو روز کاری پاسخ می‌دهد."),
    ("contact.name", "نام و نام خانوادگی"),
    ("contact.email", "نشانی ایمیل"),
    ("contact.company", "شرکت"),
    ("contact.message", "پیام"),
    ("contact.submit", "ارسال پیام"),
    ("contact.sending", "در حال ارسال…"),
    ("contact.success", "سپاسگزاریم، {{name}}. شماره پیگیری شما {{reference}} است."),
    ("contact.failure", "ارسال پیام شما ممکن نشد. لطفاً بعداً دوباره تلاش کنید."),
    ("contact.error.required", "این فیلد الزامی است."),
    ("contact.error.email", "لطفاً یک نشانی ایمیل معتبر وارد کنید."),
    ("legal.title", "اطلاعات حقوقی"),
    ("legal.body", "هلدینگ گروه اطلس، نشانی دفتر ثبت‌شده و اطلاعات ثبت شرکت."),
    ("privacy.title", "سیاست حریم خصوصی"),
    ("privacy.body", "چگونه داده‌های شخصی را گردآوری، استفاده و محافظت می‌کنیم."),
    ("search.placeholder", "جستجو در سایت"),
    ("search.results_for", "نتایج برای «{{query}}»"),
    ("search.count", "{{count}} نتیجه"),
    ("search.no_results", "نتیجه‌ای یافت نشد. عبارت دیگری را امتحان کنید."),
    ("search.kind.technology", "فناوری"),
    ("search.kind.project", "پروژه"),
    ("search.kind.news", "خبر"),
    ("coming_soon.body", "{{title}} به‌زودی در دسترس خواهد بود."),
    ("widget.summary.title", "خلاصه"),
    ("widget.summary.fallback", "خلاصه در دسترس نیست؛ چکیده مطلب نمایش داده می‌شود."),
    ("widget.highlights.title", "نکات کلیدی"),
    ("widget.highlights.error", "در حال حاضر امکان تولید نکات کلیدی وجود ندارد."),
    ("widget.highlights.refresh", "تازه‌سازی"),
    ("map.title", "دفاتر و سایت‌های ما"),
    ("map.error", "بارگذاری نقشه ممکن نشد."),
    ("map.cluster", "{{count}} مکان"),
    ("map.category.headquarters", "دفتر مرکزی"),
    ("map.category.office", "دفتر"),
    ("map.category.project", "سایت پروژه"),
    ("map.category.research", "پژوهش"),
];

// ─── Arabic (right-to-left) ─────────────────────────────────────────

const AR: &[(&str, &str)] = &[
    ("site.name", "مجموعة أطلس"),
    ("site.tagline", "نهندس مستقبلاً مستداماً"),
    ("site.language", "اللغة"),
    ("site.theme.light", "الوضع الفاتح"),
    ("site.theme.dark", "الوضع الداكن"),
    ("site.footer.rights", "© {{year}} مجموعة أطلس. جميع الحقوق محفوظة."),
    ("site.loading", "جارٍ التحميل…"),
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.technologies", "التقنيات الأساسية"),
    ("nav.projects", "المشاريع"),
    ("nav.innovation", "مركز الابتكار"),
    ("nav.sustainability", "الاستدامة"),
    ("nav.careers", "الوظائف"),
    ("nav.investors", "المستثمرون"),
    ("nav.leadership", "القيادة"),
    ("nav.partners", "الشركاء"),
    ("nav.news", "الأخبار"),
    ("nav.contact", "اتصل بنا"),
    ("nav.legal", "إشعار قانوني"),
    ("nav.privacy", "سياسة الخصوصية"),
    ("nav.search_results", "نتائج البحث"),
    ("nav.coming_soon", "قريباً"),
    ("home.hero.title", "نبني بنية الغد التحتية"),
    ("home.hero.subtitle", "الطاقة والمياه والصناعة والتنقل في {{countries}} دولة."),
    ("home.cta", "استكشف مشاريعنا"),
    ("home.featured_projects", "مشاريع مميزة"),
    ("home.latest_news", "آخر الأخبار"),
    ("about.title", "من نحن"),
    ("about.body", "مجموعة أطلس مجموعة هندسية واستثمارية متنوعة تأسست عام 1978."),
    ("about.mission", "مهمتنا تقديم بنية تحتية تدوم لأجيال."),
    ("about.values", "النزاهة والسلامة والشراكة طويلة الأمد توجه كل قراراتنا."),
    ("tech.title", "تقنياتنا الأساسية"),
    ("tech.intro", "منصات خاصة طورتها مراكزنا الهندسية."),
    ("projects.title", "المشاريع الرائدة"),
    ("projects.intro", "مختارات من المشاريع التي نفذتها شركات مجموعة أطلس."),
    ("projects.sector", "القطاع: {{sector}}"),
    ("innovation.title", "مركز الابتكار"),
    ("innovation.body", "يجمع حرمنا الباحثين والمهندسين والشركات الناشئة."),
    ("sustainability.title", "الاستدامة"),
    ("sustainability.body", "نلتزم بالوصول إلى عمليات خالية من الانبعاثات بحلول عام 2040."),
    ("careers.title", "الوظائف"),
    ("careers.body", "انضم إلى أكثر من {{employees}} زميل يبنون بنية تحتية دائمة."),
    ("investors.title", "علاقات المستثمرين"),
    ("investors.body", "التقارير المالية والعروض التقديمية وتقويم المساهمين."),
    ("leadership.title", "القيادة"),
    ("leadership.body", "مجلسنا التنفيذي ومجلس الإشراف."),
    ("partners.title", "الشركاء"),
    ("partners.body", "شركات المرافق والجامعات وشركاء التكنولوجيا الذين نعمل معهم."),
    ("news.title", "المركز الإعلامي"),
    ("news.intro", "إعلانات وقصص من جميع أنحاء المجموعة."),
    ("news.read_more", "اقرأ المزيد"),
    ("news.back", "العودة إلى كل الأخبار"),
    ("news.published", "نُشر في {{date}}"),
    ("contact.title", "اتصل بنا"),
    ("contact.intro", "أرسل لنا رسالة وسيرد فريقنا خلال يومي عمل."),
    ("contact.name", "الاسم الكامل"),
    ("contact.email", "البريد الإلكتروني"),
    ("contact.company", "الشركة"),
    ("contact.message", "الرسالة"),
    ("contact.submit", "إرسال الرسالة"),
    ("contact.sending", "جارٍ الإرسال…"),
    ("contact.success", "شكراً لك، {{name}}. رقمك المرجعي هو {{reference}}."),
    ("contact.failure", "تعذّر إرسال رسالتك. يرجى المحاولة لاحقاً."),
    ("contact.error.required", "هذا الحقل مطلوب."),
    ("contact.error.email", "يرجى إدخال بريد إلكتروني صالح."),
    ("legal.title", "إشعار قانوني"),
    ("legal.body", "شركة أطلس القابضة، المقر المسجل وبيانات السجل التجاري."),
    ("privacy.title", "سياسة الخصوصية"),
    ("privacy.body", "كيف نجمع البيانات الشخصية ونستخدمها ونحميها."),
    ("search.placeholder", "ابحث في الموقع"),
    ("search.results_for", "نتائج البحث عن «{{query}}»"),
    ("search.count", "{{count}} نتيجة"),
    ("search.no_results", "لم يتم العثور على نتائج. جرّب كلمة بحث أخرى."),
    ("search.kind.technology", "تقنية"),
    ("search.kind.project", "مشروع"),
    ("search.kind.news", "خبر"),
    ("coming_soon.body", "{{title}} سيتوفر قريباً. يرجى العودة لاحقاً."),
    ("widget.summary.title", "ملخص"),
    ("widget.summary.fallback", "الملخص غير متاح، يتم عرض مقتطف المقال."),
    ("widget.highlights.title", "أبرز النقاط"),
    ("widget.highlights.error", "تعذّر إنشاء أبرز النقاط حالياً."),
    ("widget.highlights.refresh", "تحديث"),
    ("map.title", "مواقعنا"),
    ("map.error", "تعذّر تحميل الخريطة."),
    ("map.cluster", "{{count}} مواقع"),
    ("map.category.headquarters", "المقر الرئيسي"),
    ("map.category.office", "مكتب"),
    ("map.category.project", "موقع مشروع"),
    ("map.category.research", "بحث"),
];
