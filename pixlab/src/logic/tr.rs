//! UI translations. English strings are the keys; Russian is the only
//! other table.

use crate::{AppWindow, config, global_logic};
use once_cell::sync::Lazy;
use slint::ComponentHandle;
use std::collections::HashMap;

const SUPPORTED_LANGS: [&str; 2] = ["en", "ru"];
const FALLBACK_LANG: &str = "en";

static RU: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Image Processor", "Обработка изображений"),
        ("Load image", "Загрузить изображение"),
        ("Take camera snapshot", "Сделать снимок с камеры"),
        ("Red", "Красный"),
        ("Green", "Зеленый"),
        ("Blue", "Синий"),
        ("red", "красный"),
        ("green", "зеленый"),
        ("blue", "синий"),
        ("Show channel", "Показать канал"),
        ("Red threshold:", "Порог для красного:"),
        ("Apply red mask", "Применить красную маску"),
        ("Sharpen", "Повысить резкость"),
        ("Line coordinates (x1 y1 x2 y2):", "Координаты линии (x1 y1 x2 y2):"),
        ("Line thickness:", "Толщина линии:"),
        ("Draw line", "Нарисовать линию"),
        ("Image files", "Файлы изображений"),
        ("Choose an image", "Выберите изображение"),
        ("Choose file failed", "Не удалось выбрать файл"),
        ("Reason", "Причина"),
        ("Ready", "Готово к работе"),
        ("Success", "Успешно"),
        ("Error", "Ошибка"),
        ("Image loaded", "Изображение загружено"),
        ("Camera snapshot taken", "Снимок с камеры получен"),
        ("Channel shown", "Показан канал"),
        ("Red Channel", "Красный канал"),
        ("Green Channel", "Зеленый канал"),
        ("Blue Channel", "Синий канал"),
        ("Red Mask", "Красная маска"),
        ("Red mask applied, threshold", "Красная маска применена, порог"),
        ("Image sharpened", "Резкость повышена"),
        ("Line drawn", "Линия нарисована"),
        ("Load error", "Ошибка загрузки"),
        ("Camera error", "Ошибка камеры"),
        ("No image", "Нет изображения"),
        ("Invalid input", "Некорректный ввод"),
        ("Display error", "Ошибка отображения"),
        ("Processing error", "Ошибка обработки"),
        ("Busy", "Занято"),
        ("Failed to display the image", "Не удалось отобразить изображение"),
        ("Failed to load", "Не удалось загрузить"),
        ("Camera capture failed", "Не удалось получить снимок с камеры"),
        (
            "No image loaded. Load an image or take a camera snapshot first",
            "Сначала загрузите изображение или сделайте снимок с камеры",
        ),
        ("Image operation failed", "Не удалось обработать изображение"),
        ("Another operation is still running", "Другая операция еще выполняется"),
        (
            "Enter the line coordinates as `x1 y1 x2 y2`",
            "Введите координаты линии в виде `x1 y1 x2 y2`",
        ),
        ("Need 4 coordinates (x1 y1 x2 y2)", "Нужно 4 координаты (x1 y1 x2 y2)"),
        (
            "Line thickness must be a positive integer",
            "Толщина линии должна быть положительным целым числом",
        ),
        ("Point", "Точка"),
        ("is outside the image", "находится за пределами изображения"),
        ("the field is empty", "поле пустое"),
        ("is not an integer", "не является целым числом"),
        ("got", "получено"),
        ("at most", "не более"),
    ])
});

pub fn init(ui: &AppWindow) {
    global_logic!(ui).on_tr(move |text| tr(text.as_str()).into());
}

/// Translates `text` into the configured UI language.
pub fn tr(text: &str) -> String {
    tr_with(text, &config::all().preference.language)
}

pub fn tr_with(text: &str, lang: &str) -> String {
    match normalize_lang(lang) {
        "ru" => RU.get(text).copied().unwrap_or(text).to_string(),
        _ => text.to_string(),
    }
}

/// `ru_RU.UTF-8`, `ru-RU` and `RU` all become `ru`; unknown languages fall back to English.
pub fn normalize_lang(code: &str) -> &'static str {
    let code = code.trim().to_ascii_lowercase();
    let short = code.split(['-', '_', '.']).next().unwrap_or_default();

    SUPPORTED_LANGS
        .into_iter()
        .find(|lang| *lang == short)
        .unwrap_or(FALLBACK_LANG)
}
