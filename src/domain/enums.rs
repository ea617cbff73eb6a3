/// Menu commands, in the order they appear in the "Opciones" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddTask,
    DeleteChecked,
    MarkCompleted,
    UnmarkCompleted,
    ModifyTask,
    SaveList,
    LoadList,
}

impl MenuCommand {
    /// Get all commands as a list
    pub fn all() -> &'static [MenuCommand] {
        &[
            MenuCommand::AddTask,
            MenuCommand::DeleteChecked,
            MenuCommand::MarkCompleted,
            MenuCommand::UnmarkCompleted,
            MenuCommand::ModifyTask,
            MenuCommand::SaveList,
            MenuCommand::LoadList,
        ]
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::AddTask => "Agregar tarea",
            MenuCommand::DeleteChecked => "Borrar tareas seleccionadas",
            MenuCommand::MarkCompleted => "Marcar tarea como completada",
            MenuCommand::UnmarkCompleted => "Desmarcar tarea como realizada",
            MenuCommand::ModifyTask => "Modificar tarea",
            MenuCommand::SaveList => "Guardar Listado",
            MenuCommand::LoadList => "Cargar Listado",
        }
    }

    /// Accelerator key usable outside the menu
    pub fn key(&self) -> char {
        match self {
            MenuCommand::AddTask => 'a',
            MenuCommand::DeleteChecked => 'x',
            MenuCommand::MarkCompleted => 'c',
            MenuCommand::UnmarkCompleted => 'u',
            MenuCommand::ModifyTask => 'e',
            MenuCommand::SaveList => 's',
            MenuCommand::LoadList => 'l',
        }
    }

    /// Look up a command by its accelerator key
    pub fn from_key(key: char) -> Option<Self> {
        Self::all().iter().copied().find(|cmd| cmd.key() == key)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Menu,
    EditingText,
    Error,
}

/// Visual treatment of a row's text field.
///
/// Kept apart from `Task::done`: the checkbox flips `done`, while only the
/// mark/unmark commands (and load) change the treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Treatment {
    #[default]
    Default,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_seven_commands() {
        assert_eq!(MenuCommand::all().len(), 7);
        assert_eq!(MenuCommand::all()[0], MenuCommand::AddTask);
        assert_eq!(MenuCommand::all()[6], MenuCommand::LoadList);
    }

    #[test]
    fn test_from_key() {
        for cmd in MenuCommand::all() {
            assert_eq!(MenuCommand::from_key(cmd.key()), Some(*cmd));
        }
        assert_eq!(MenuCommand::from_key('q'), None);
        assert_eq!(MenuCommand::from_key(' '), None);
    }

    #[test]
    fn test_default_treatment() {
        assert_eq!(Treatment::default(), Treatment::Default);
    }
}
