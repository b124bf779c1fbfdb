//! Asignación de colores de ruta
//!
//! Cada ruta que entra en seguimiento recibe un color de una paleta fija
//! para distinguir sus marcadores sobre el mapa.

use rand::seq::SliceRandom;

/// Paleta por defecto del dashboard
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#b71c1c", "#4a148c", "#2e7d32", "#e65100", "#2962ff",
    "#c2185b", "#FFCD00", "#3e2723", "#03a9f4", "#827717",
];

/// Selección del color visual de una ruta recién iniciada
pub trait ColorAssigner: Send + Sync {
    /// Elegir un color; puede repetirse entre rutas activas
    fn assign(&self) -> String;
}

/// Asignador sobre una paleta fija, selección pseudoaleatoria
pub struct PaletteColorAssigner {
    palette: Vec<String>,
}

impl PaletteColorAssigner {
    /// Una paleta vacía cae a la paleta por defecto
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            Self::default_palette()
        } else {
            palette
        };

        Self { palette }
    }

    fn default_palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }
}

impl Default for PaletteColorAssigner {
    fn default() -> Self {
        Self::new(Self::default_palette())
    }
}

impl ColorAssigner for PaletteColorAssigner {
    fn assign(&self) -> String {
        let mut rng = rand::thread_rng();
        self.palette
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PALETTE[0].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_returns_palette_color() {
        let assigner = PaletteColorAssigner::default();

        for _ in 0..50 {
            let color = assigner.assign();
            assert!(DEFAULT_PALETTE.contains(&color.as_str()));
        }
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let assigner = PaletteColorAssigner::new(Vec::new());
        let color = assigner.assign();

        assert!(DEFAULT_PALETTE.contains(&color.as_str()));
    }

    #[test]
    fn test_custom_palette_is_used() {
        let assigner = PaletteColorAssigner::new(vec!["#123456".to_string()]);

        assert_eq!(assigner.assign(), "#123456");
    }
}
