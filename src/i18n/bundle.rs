//! Static translation bundles
//!
//! Every field is a plain `&'static str`, so a bundle that misses a string
//! does not compile.

use super::Language;

#[derive(Debug, PartialEq, Eq)]
pub struct TranslationBundle {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub search: SearchStrings,
    pub download: DownloadStrings,
    pub countdown: CountdownStrings,
    pub footer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavStrings {
    pub home: &'static str,
    pub ecosystem: &'static str,
    pub whitepapers: &'static str,
    pub language: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SearchStrings {
    pub placeholder: &'static str,
    pub typing: &'static str,
    pub results_for: &'static str,
    pub empty: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DownloadStrings {
    pub start: &'static str,
    pub running: &'static str,
    pub complete: &'static str,
    pub saved_to: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CountdownStrings {
    pub title: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub launched: &'static str,
}

pub fn for_language(language: Language) -> &'static TranslationBundle {
    match language {
        Language::En => &EN,
        Language::Tr => &TR,
        Language::Uz => &UZ,
        Language::Ru => &RU,
        Language::Ar => &AR,
        Language::Es => &ES,
    }
}

static EN: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "Home",
        ecosystem: "Ecosystem",
        whitepapers: "Whitepapers",
        language: "Language",
    },
    hero: HeroStrings {
        title: "The chain that connects everything",
        subtitle: "Fast finality, low fees and an open ecosystem for builders.",
        cta: "Explore the ecosystem",
    },
    search: SearchStrings {
        placeholder: "Search whitepapers...",
        typing: "typing...",
        results_for: "Results for",
        empty: "No whitepapers match your search",
    },
    download: DownloadStrings {
        start: "Download",
        running: "Downloading",
        complete: "Download complete",
        saved_to: "Saved to",
    },
    countdown: CountdownStrings {
        title: "Mainnet launch in",
        days: "days",
        hours: "hours",
        minutes: "minutes",
        seconds: "seconds",
        launched: "Mainnet is live",
    },
    footer: "All rights reserved.",
};

static TR: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "Ana Sayfa",
        ecosystem: "Ekosistem",
        whitepapers: "Teknik Belgeler",
        language: "Dil",
    },
    hero: HeroStrings {
        title: "Her şeyi birbirine bağlayan zincir",
        subtitle: "Hızlı kesinlik, düşük ücretler ve geliştiriciler için açık bir ekosistem.",
        cta: "Ekosistemi keşfedin",
    },
    search: SearchStrings {
        placeholder: "Teknik belgelerde ara...",
        typing: "yazıyor...",
        results_for: "Sonuçlar",
        empty: "Aramanızla eşleşen belge yok",
    },
    download: DownloadStrings {
        start: "İndir",
        running: "İndiriliyor",
        complete: "İndirme tamamlandı",
        saved_to: "Kaydedildi",
    },
    countdown: CountdownStrings {
        title: "Ana ağın açılışına",
        days: "gün",
        hours: "saat",
        minutes: "dakika",
        seconds: "saniye",
        launched: "Ana ağ yayında",
    },
    footer: "Tüm hakları saklıdır.",
};

static UZ: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "Bosh sahifa",
        ecosystem: "Ekotizim",
        whitepapers: "Oq qogʻozlar",
        language: "Til",
    },
    hero: HeroStrings {
        title: "Hamma narsani bogʻlovchi zanjir",
        subtitle: "Tezkor yakunlanish, past toʻlovlar va dasturchilar uchun ochiq ekotizim.",
        cta: "Ekotizimni oʻrganing",
    },
    search: SearchStrings {
        placeholder: "Oq qogʻozlardan qidirish...",
        typing: "yozmoqda...",
        results_for: "Natijalar",
        empty: "Qidiruvingizga mos hujjat topilmadi",
    },
    download: DownloadStrings {
        start: "Yuklab olish",
        running: "Yuklanmoqda",
        complete: "Yuklab olish tugadi",
        saved_to: "Saqlandi",
    },
    countdown: CountdownStrings {
        title: "Asosiy tarmoq ishga tushishiga",
        days: "kun",
        hours: "soat",
        minutes: "daqiqa",
        seconds: "soniya",
        launched: "Asosiy tarmoq ishga tushdi",
    },
    footer: "Barcha huquqlar himoyalangan.",
};

static RU: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "Главная",
        ecosystem: "Экосистема",
        whitepapers: "Документация",
        language: "Язык",
    },
    hero: HeroStrings {
        title: "Блокчейн, который связывает всё",
        subtitle: "Быстрая финальность, низкие комиссии и открытая экосистема для разработчиков.",
        cta: "Изучить экосистему",
    },
    search: SearchStrings {
        placeholder: "Поиск по документам...",
        typing: "печатает...",
        results_for: "Результаты для",
        empty: "Документы не найдены",
    },
    download: DownloadStrings {
        start: "Скачать",
        running: "Загрузка",
        complete: "Загрузка завершена",
        saved_to: "Сохранено в",
    },
    countdown: CountdownStrings {
        title: "До запуска основной сети",
        days: "дн.",
        hours: "ч.",
        minutes: "мин.",
        seconds: "сек.",
        launched: "Основная сеть запущена",
    },
    footer: "Все права защищены.",
};

static AR: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "الرئيسية",
        ecosystem: "المنظومة",
        whitepapers: "الأوراق البيضاء",
        language: "اللغة",
    },
    hero: HeroStrings {
        title: "السلسلة التي تربط كل شيء",
        subtitle: "نهائية سريعة ورسوم منخفضة ومنظومة مفتوحة للمطورين.",
        cta: "استكشف المنظومة",
    },
    search: SearchStrings {
        placeholder: "ابحث في الأوراق البيضاء...",
        typing: "يكتب...",
        results_for: "نتائج البحث عن",
        empty: "لا توجد مستندات مطابقة",
    },
    download: DownloadStrings {
        start: "تنزيل",
        running: "جارٍ التنزيل",
        complete: "اكتمل التنزيل",
        saved_to: "تم الحفظ في",
    },
    countdown: CountdownStrings {
        title: "إطلاق الشبكة الرئيسية خلال",
        days: "أيام",
        hours: "ساعات",
        minutes: "دقائق",
        seconds: "ثوانٍ",
        launched: "الشبكة الرئيسية تعمل الآن",
    },
    footer: "جميع الحقوق محفوظة.",
};

static ES: TranslationBundle = TranslationBundle {
    nav: NavStrings {
        home: "Inicio",
        ecosystem: "Ecosistema",
        whitepapers: "Documentos técnicos",
        language: "Idioma",
    },
    hero: HeroStrings {
        title: "La cadena que lo conecta todo",
        subtitle: "Finalidad rápida, comisiones bajas y un ecosistema abierto para desarrolladores.",
        cta: "Explora el ecosistema",
    },
    search: SearchStrings {
        placeholder: "Buscar documentos...",
        typing: "escribiendo...",
        results_for: "Resultados para",
        empty: "Ningún documento coincide con tu búsqueda",
    },
    download: DownloadStrings {
        start: "Descargar",
        running: "Descargando",
        complete: "Descarga completa",
        saved_to: "Guardado en",
    },
    countdown: CountdownStrings {
        title: "Lanzamiento de la red principal en",
        days: "días",
        hours: "horas",
        minutes: "minutos",
        seconds: "segundos",
        launched: "La red principal está activa",
    },
    footer: "Todos los derechos reservados.",
};
