use gpui::actions;

// Navigation actions
actions!(navigation, [
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
]);

// Editing actions
actions!(editing, [
    StartEdit,
    ConfirmEdit,
    ConfirmEditUp,  // Shift+Enter - confirms and moves up
    CancelEdit,
    TabNext,
    TabPrev,
    BackspaceChar,
    DeleteCell,
]);

// Clipboard actions
actions!(clipboard, [
    Paste,
]);

// File actions
actions!(file, [
    Save,
]);
