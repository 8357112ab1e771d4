use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Decimal and digit-grouping separators for the current language
pub fn number_separators() -> (char, char) {
    separators_for(lang())
}

pub fn separators_for(l: Lang) -> (char, char) {
    match l {
        Lang::En => ('.', ','),
        Lang::Ru => (',', '\u{a0}'),
    }
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Navigation ──────────────────────────────────────
        "app.title" => if ru { "Визуализатор векторов" } else { "Vector Visualiser" },
        "nav.planar" => if ru { "2D плоскость" } else { "2D Plane" },
        "nav.spatial" => if ru { "3D пространство" } else { "3D Plane" },
        "nav.placeholder" => if ru { "Выберите плоскость для визуализации" } else { "Please select a plane to visualise" },
        "nav.add" => if ru { "Добавить" } else { "Add" },
        "nav.settings" => if ru { "Настройки" } else { "Settings" },

        // ── Selection ───────────────────────────────────────
        "selection.current" => if ru { "Выбранный вектор" } else { "Currently selected vector" },
        "selection.none" => if ru { "Вектор не выбран" } else { "No vector is selected" },
        "selection.compare" => if ru { "Сравнение с" } else { "Comparing with" },
        "selection.delete" => if ru { "Удалить выбранный вектор" } else { "Delete selected vector" },
        "selection.hint" => if ru { "Ctrl+клик: выбрать второй вектор" } else { "Cmd/Ctrl+click: pick a second vector" },

        // ── New vector editor ───────────────────────────────
        "editor.title" => if ru { "Новый вектор" } else { "New Vector" },
        "editor.prompt" => if ru { "Введите скаляры для каждого базисного вектора:" } else { "Enter scalar quantities for each basis vector:" },
        "editor.basis_i" => if ru { "Базисный вектор i" } else { "Basis vector i" },
        "editor.basis_j" => if ru { "Базисный вектор j" } else { "Basis vector j" },
        "editor.basis_k" => if ru { "Базисный вектор k" } else { "Basis vector k" },
        "editor.add" => if ru { "Добавить" } else { "Add" },
        "editor.close" => if ru { "Закрыть" } else { "Close" },

        // ── Errors ──────────────────────────────────────────
        "error.invalid_values" => if ru { "Введены неверные значения" } else { "Invalid values entered" },

        // ── Status bar ──────────────────────────────────────
        "status.vectors" => if ru { "Векторов" } else { "Vectors" },
        "status.ready" => if ru { "Готово" } else { "Ready" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.units_visible" => if ru { "Единиц на ось" } else { "Units per axis" },
        "settings.half_range" => if ru { "Линий от центра" } else { "Lines from origin" },
        "settings.arrows" => if ru { "Стрелки" } else { "Arrows" },
        "settings.head_length" => if ru { "Длина наконечника" } else { "Head length" },
        "settings.head_angle" => if ru { "Угол наконечника" } else { "Head angle" },
        "settings.stroke" => if ru { "Толщина линии" } else { "Line thickness" },
        "settings.heads_3d" => if ru { "Наконечники в 3D" } else { "Arrowheads in 3D" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.language" => if ru { "Язык" } else { "Language" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
